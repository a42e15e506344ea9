//! catshelter - Cat shelter record keeping
//!
//! Keeps a shelter's cat records in a store that mirrors the whole
//! collection into durable key-value storage after every change, with
//! filtering, breed listing and dashboard statistics on top.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::{CatStore, LoadOrigin, StoreOutcome};
pub use domain::{AdoptionStatus, CatFilter, CatRecord, CatUpdate, NewCat};
pub use error::{ShelterError, StorageError};
pub use infrastructure::{FileSystemStorage, KeyValueStorage, MemoryStorage};
