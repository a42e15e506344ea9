//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod shelter_dir;
pub mod storage;

pub use config::Config;
pub use shelter_dir::ShelterDirectory;
pub use storage::{FileSystemStorage, KeyValueStorage, MemoryStorage};
