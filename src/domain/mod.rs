//! Domain layer - Cat records, filters and dashboard figures

pub mod cat;
pub mod filter;
pub mod seed;
pub mod stats;

pub use cat::{
    AdoptionStatus, CatId, CatRecord, CatUpdate, CatValidationError, NewCat, HEALTH_STATUSES,
};
pub use filter::CatFilter;
pub use seed::seed_cats;
pub use stats::{DashboardSummary, StatusShare};
