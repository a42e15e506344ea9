//! Dashboard use case

use crate::application::CatStore;
use crate::domain::DashboardSummary;
use crate::infrastructure::{Config, KeyValueStorage};
use chrono::NaiveDate;

/// Computes dashboard figures from the current collection
pub struct DashboardService<'a, S: KeyValueStorage> {
    store: &'a CatStore<S>,
    recent_days: u32,
    recent_limit: usize,
}

impl<'a, S: KeyValueStorage> DashboardService<'a, S> {
    pub fn new(store: &'a CatStore<S>, config: &Config) -> Self {
        DashboardService {
            store,
            recent_days: config.recent_intake_days,
            recent_limit: config.recent_cats_limit,
        }
    }

    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::from_cats(self.store.all(), today, self.recent_days, self.recent_limit)
    }
}
