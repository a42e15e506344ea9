//! Application layer - Use cases and orchestration

pub mod cat_store;
pub mod dashboard;
pub mod init;
pub mod manage_config;

pub use cat_store::{CatStore, LoadOrigin, StoreOutcome};
pub use dashboard::DashboardService;
pub use manage_config::ConfigService;
