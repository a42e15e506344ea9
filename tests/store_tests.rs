use catshelter::infrastructure::config::DEFAULT_STORAGE_KEY;
use catshelter::{
    AdoptionStatus, CatFilter, CatStore, CatUpdate, FileSystemStorage, KeyValueStorage,
    LoadOrigin, MemoryStorage, NewCat, StorageError,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use tempfile::TempDir;

fn new_cat(name: &str, breed: &str, age: f64, status: AdoptionStatus) -> NewCat {
    let mut cat = NewCat::with_defaults(name, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
    cat.breed = breed.to_string();
    cat.color = "Gray".to_string();
    cat.image_url = "https://example.com/cat.jpg".to_string();
    cat.age = age;
    cat.adoption_status = status;
    cat
}

fn empty_store() -> CatStore<MemoryStorage> {
    CatStore::load(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[]"))
}

/// Storage whose reads work but every write fails.
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl KeyValueStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
        })
    }
}

/// Storage that cannot be read at all.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let mut store = empty_store();
    let ids: HashSet<String> = (0..200)
        .map(|i| {
            store
                .create(new_cat(&format!("cat{i}"), "Bengal", 1.0, AdoptionStatus::Available))
                .into_value()
                .id
        })
        .collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len(), 200);
}

#[test]
fn collection_survives_reload() {
    let mut store = empty_store();
    let a = store
        .create(new_cat("A", "Bengal", 1.5, AdoptionStatus::Available))
        .into_value();
    let _ = store.create(new_cat("B", "Persian", 7.0, AdoptionStatus::Foster));
    let _ = store.update(
        &a.id,
        &CatUpdate {
            description: Some("Loves boxes".to_string()),
            ..CatUpdate::default()
        },
    );
    let before = store.all().to_vec();

    let reloaded = CatStore::load(store.into_storage());

    assert_eq!(reloaded.origin(), &LoadOrigin::Stored);
    assert_eq!(reloaded.all(), before.as_slice());
}

#[test]
fn collection_survives_reload_from_disk() {
    let temp = TempDir::new().unwrap();
    let mut store = CatStore::load(FileSystemStorage::new(temp.path()));
    assert_eq!(store.origin(), &LoadOrigin::SeededMissing);

    let created = store
        .create(new_cat("Disk", "Bengal", 2.0, AdoptionStatus::Pending))
        .into_value();
    let before = store.all().to_vec();

    let reloaded = CatStore::load(FileSystemStorage::new(temp.path()));
    assert_eq!(reloaded.all(), before.as_slice());
    // Seed records plus the new one
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get_by_id(&created.id), Some(&created));
}

#[test]
fn custom_key_isolates_collections() {
    let temp = TempDir::new().unwrap();
    let mut store = CatStore::load_with_key(FileSystemStorage::new(temp.path()), "shelter-b");
    let _ = store.create(new_cat("B", "Bengal", 2.0, AdoptionStatus::Pending));

    assert!(temp.path().join("shelter-b.json").is_file());
    let default_store = CatStore::load(FileSystemStorage::new(temp.path()));
    assert_eq!(default_store.origin(), &LoadOrigin::SeededMissing);
}

#[test]
fn empty_update_leaves_record_unchanged() {
    let mut store = empty_store();
    let cat = store
        .create(new_cat("Same", "Bengal", 4.0, AdoptionStatus::Available))
        .into_value();

    let outcome = store.update(&cat.id, &CatUpdate::default());

    assert!(outcome.is_persisted());
    assert_eq!(outcome.into_value(), Some(cat.clone()));
    assert_eq!(store.get_by_id(&cat.id), Some(&cat));
}

#[test]
fn delete_then_get_by_id_is_not_found() {
    let mut store = empty_store();
    let cat = store
        .create(new_cat("Gone", "Bengal", 4.0, AdoptionStatus::Available))
        .into_value();

    assert!(store.delete(&cat.id).into_value());
    assert!(store.get_by_id(&cat.id).is_none());
    assert!(!store.delete(&cat.id).into_value());
}

#[test]
fn filter_predicates_are_anded() {
    let mut store = empty_store();
    let _ = store.create(new_cat("A", "Siamese", 3.0, AdoptionStatus::Available));
    let b = store
        .create(new_cat("B", "Siamese", 10.0, AdoptionStatus::Adopted))
        .into_value();

    let filter = CatFilter {
        breed: Some("siamese".to_string()),
        min_age: Some(5.0),
        ..CatFilter::default()
    };
    let result = store.list(Some(&filter));

    assert_eq!(result, vec![&b]);
}

#[test]
fn empty_filter_behaves_like_no_filter() {
    let store = CatStore::load(MemoryStorage::new());
    let all: Vec<_> = store.all().iter().collect();

    assert_eq!(store.list(None), all);
    assert_eq!(store.list(Some(&CatFilter::default())), all);
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = empty_store();
    for name in ["first", "second", "third"] {
        let _ = store.create(new_cat(name, "Bengal", 1.0, AdoptionStatus::Available));
    }

    let names: Vec<&str> = store.list(None).iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn breeds_are_stored_verbatim_deduplicated_and_sorted() {
    let mut store = empty_store();
    for breed in ["Bengal", "Abyssinian", "Bengal", "bengal"] {
        let _ = store.create(new_cat("x", breed, 1.0, AdoptionStatus::Available));
    }

    assert_eq!(store.list_breeds(), vec!["Abyssinian", "Bengal", "bengal"]);
}

#[test]
fn unknown_id_mutations_are_no_ops() {
    let mut store = empty_store();
    let _ = store.create(new_cat("Only", "Bengal", 1.0, AdoptionStatus::Available));
    let before = store.all().to_vec();
    let writes = store.storage().write_count();

    let update = store.update(
        "nonexistent-id",
        &CatUpdate {
            name: Some("Changed".to_string()),
            ..CatUpdate::default()
        },
    );
    assert!(update.into_value().is_none());
    assert!(!store.delete("nonexistent-id").into_value());

    assert_eq!(store.all(), before.as_slice());
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn corrupt_storage_yields_seed_set() {
    for payload in ["not json", "{\"id\": 1}", "[{\"id\": \"x\"}]"] {
        let store = CatStore::load(MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, payload));

        assert!(
            matches!(store.origin(), LoadOrigin::SeededCorrupt(_)),
            "payload {payload:?}"
        );
        let names: Vec<&str> = store.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Whiskers", "Shadow", "Luna"]);
    }
}

#[test]
fn unreadable_storage_yields_seed_set() {
    let store = CatStore::load(BrokenStorage);
    assert!(matches!(store.origin(), LoadOrigin::SeededUnreadable(_)));
    assert_eq!(store.len(), 3);
}

#[test]
fn write_failure_keeps_memory_authoritative() {
    let mut store = CatStore::load(ReadOnlyStorage {
        inner: MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "[]"),
    });

    let outcome = store.create(new_cat("Kept", "Bengal", 1.0, AdoptionStatus::Available));
    assert!(!outcome.is_persisted());
    assert!(matches!(
        outcome.persist_error(),
        Some(StorageError::Write { .. })
    ));

    let (cat, _) = outcome.into_parts();
    assert_eq!(store.get_by_id(&cat.id), Some(&cat));

    let deleted = store.delete(&cat.id);
    assert!(*deleted.value());
    assert!(!deleted.is_persisted());
    assert!(store.is_empty());
}

#[test]
fn adoption_statuses_are_fixed() {
    let store = empty_store();
    assert!(store.is_empty());
    let names: Vec<&str> = CatStore::<MemoryStorage>::list_adoption_statuses()
        .iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(names, vec!["available", "adopted", "pending", "foster"]);
}

#[test]
fn stored_payload_uses_documented_field_names() {
    let mut store = empty_store();
    let _ = store.create(new_cat("Wire", "Bengal", 1.0, AdoptionStatus::Foster));

    let payload = store
        .storage()
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let record = &value[0];

    for field in [
        "id",
        "name",
        "age",
        "breed",
        "color",
        "weight",
        "healthStatus",
        "neutered",
        "vaccinated",
        "adoptionStatus",
        "description",
        "imageUrl",
        "intakeDate",
        "lastCheckup",
    ] {
        assert!(record.get(field).is_some(), "missing {field}");
    }
    assert_eq!(record["adoptionStatus"], "foster");
    assert_eq!(record["intakeDate"], "2025-01-17");
}
