//! Cat data-access store.
//!
//! # Responsibility
//! - Own the canonical in-memory cat collection.
//! - Mirror the whole collection into key-value storage after every mutation.
//! - Answer filtered and unfiltered queries.
//!
//! # Invariants
//! - Ids are unique across the collection at all times.
//! - Collection order is insertion order; updates keep a record's position.
//! - A failed mirror write never rolls back memory; memory stays authoritative.
//! - Not-found is reported through `Option`/`bool`, never through `Err`.

use crate::domain::{seed_cats, AdoptionStatus, CatFilter, CatRecord, CatUpdate, NewCat};
use crate::error::StorageError;
use crate::infrastructure::config::DEFAULT_STORAGE_KEY;
use crate::infrastructure::KeyValueStorage;
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashSet};
use uuid::Uuid;

/// How the initial collection was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Parsed from storage
    Stored,
    /// Nothing was stored under the key
    SeededMissing,
    /// A payload existed but was not a valid collection
    SeededCorrupt(String),
    /// Storage could not be read
    SeededUnreadable(String),
}

impl LoadOrigin {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, LoadOrigin::Stored)
    }
}

/// Result of a mutation: the value plus the mirror-write failure, if any.
///
/// The in-memory change has already happened either way.
#[derive(Debug)]
#[must_use]
pub struct StoreOutcome<T> {
    value: T,
    persist_error: Option<StorageError>,
}

impl<T> StoreOutcome<T> {
    fn new(value: T, persist_error: Option<StorageError>) -> Self {
        StoreOutcome {
            value,
            persist_error,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// False only when a mirror write was attempted and failed.
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn persist_error(&self) -> Option<&StorageError> {
        self.persist_error.as_ref()
    }

    pub fn into_parts(self) -> (T, Option<StorageError>) {
        (self.value, self.persist_error)
    }
}

/// Sole owner of the cat collection; all reads and writes pass through it.
#[derive(Debug)]
pub struct CatStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    cats: Vec<CatRecord>,
    origin: LoadOrigin,
}

impl<S: KeyValueStorage> CatStore<S> {
    /// Load the collection stored under the default key, or seed it.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load the collection stored under `key`, or seed it.
    ///
    /// Never fails: a missing, unreadable or malformed payload is logged and
    /// replaced by the seed records. Seeding does not write to storage.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let (cats, origin) = match storage.get(&key) {
            Ok(Some(payload)) => match parse_collection(&payload) {
                Ok(cats) => {
                    info!(
                        "event=store_load module=store status=ok key={} count={}",
                        key,
                        cats.len()
                    );
                    (cats, LoadOrigin::Stored)
                }
                Err(reason) => {
                    warn!(
                        "event=store_load module=store status=corrupt key={} error={}",
                        key, reason
                    );
                    (seed_cats(), LoadOrigin::SeededCorrupt(reason))
                }
            },
            Ok(None) => {
                info!(
                    "event=store_load module=store status=seeded key={} reason=missing",
                    key
                );
                (seed_cats(), LoadOrigin::SeededMissing)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=unreadable key={} error={}",
                    key, err
                );
                (seed_cats(), LoadOrigin::SeededUnreadable(err.to_string()))
            }
        };

        CatStore {
            storage,
            key,
            cats,
            origin,
        }
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Full collection in insertion order
    pub fn all(&self) -> &[CatRecord] {
        &self.cats
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    /// Records matching every set predicate of `filter`, in collection order.
    /// `None` returns the whole collection.
    pub fn list(&self, filter: Option<&CatFilter>) -> Vec<&CatRecord> {
        match filter {
            Some(filter) => self.cats.iter().filter(|c| filter.matches(c)).collect(),
            None => self.cats.iter().collect(),
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&CatRecord> {
        self.cats.iter().find(|c| c.id == id)
    }

    /// Mint an id, append the record and mirror the collection.
    pub fn create(&mut self, data: NewCat) -> StoreOutcome<CatRecord> {
        let id = self.mint_id();
        let record = data.into_record(id);
        self.cats.push(record.clone());

        info!(
            "event=cat_create module=store status=ok id={} count={}",
            record.id,
            self.cats.len()
        );
        let persist_error = self.persist();
        StoreOutcome::new(record, persist_error)
    }

    /// Merge `changes` over the record with `id`, keeping its position.
    ///
    /// Yields `None` without touching memory or storage when `id` is unknown.
    pub fn update(&mut self, id: &str, changes: &CatUpdate) -> StoreOutcome<Option<CatRecord>> {
        let Some(index) = self.position(id) else {
            debug!("event=cat_update module=store status=not_found id={}", id);
            return StoreOutcome::new(None, None);
        };

        let mut merged = self.cats[index].clone();
        changes.apply_to(&mut merged);
        self.cats[index] = merged.clone();

        info!("event=cat_update module=store status=ok id={}", id);
        let persist_error = self.persist();
        StoreOutcome::new(Some(merged), persist_error)
    }

    /// Remove the record with `id`.
    ///
    /// Yields `false` without touching memory or storage when `id` is unknown.
    pub fn delete(&mut self, id: &str) -> StoreOutcome<bool> {
        let Some(index) = self.position(id) else {
            debug!("event=cat_delete module=store status=not_found id={}", id);
            return StoreOutcome::new(false, None);
        };

        self.cats.remove(index);

        info!(
            "event=cat_delete module=store status=ok id={} count={}",
            id,
            self.cats.len()
        );
        let persist_error = self.persist();
        StoreOutcome::new(true, persist_error)
    }

    /// Write the current collection under the store key without changing it.
    ///
    /// Used to make a freshly seeded collection durable, so the seed ids stay
    /// stable across loads.
    pub fn save(&mut self) -> StoreOutcome<()> {
        let persist_error = self.persist();
        if persist_error.is_none() {
            info!(
                "event=store_save module=store status=ok key={} count={}",
                self.key,
                self.cats.len()
            );
        }
        StoreOutcome::new((), persist_error)
    }

    /// Distinct breeds in the collection, sorted ascending.
    pub fn list_breeds(&self) -> Vec<String> {
        self.cats
            .iter()
            .map(|c| c.breed.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The four adoption statuses in their fixed order. Not derived from data.
    pub fn list_adoption_statuses() -> &'static [AdoptionStatus] {
        &AdoptionStatus::ALL
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.cats.iter().position(|c| c.id == id)
    }

    fn mint_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }

    /// Rewrite the whole collection under the store key.
    fn persist(&mut self) -> Option<StorageError> {
        let payload = match serde_json::to_string(&self.cats) {
            Ok(payload) => payload,
            Err(source) => {
                warn!(
                    "event=store_persist module=store status=error key={} error={}",
                    self.key, source
                );
                return Some(StorageError::Encode {
                    key: self.key.clone(),
                    source,
                });
            }
        };

        match self.storage.set(&self.key, &payload) {
            Ok(()) => {
                debug!(
                    "event=store_persist module=store status=ok key={} bytes={}",
                    self.key,
                    payload.len()
                );
                None
            }
            Err(err) => {
                warn!(
                    "event=store_persist module=store status=error key={} error={}",
                    self.key, err
                );
                Some(err)
            }
        }
    }
}

/// Decode a stored payload, rejecting duplicate ids.
fn parse_collection(payload: &str) -> Result<Vec<CatRecord>, String> {
    let cats: Vec<CatRecord> = serde_json::from_str(payload).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for cat in &cats {
        if !seen.insert(cat.id.as_str()) {
            return Err(format!("duplicate id `{}`", cat.id));
        }
    }

    Ok(cats)
}
