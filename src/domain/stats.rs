//! Dashboard aggregation over the cat collection

use crate::domain::{AdoptionStatus, CatRecord};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Count and share of one adoption status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: AdoptionStatus,
    pub count: usize,
    /// 0.0 to 100.0; 0.0 when the collection is empty
    pub percentage: f64,
}

/// Figures shown on the shelter dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub available: usize,
    pub adopted: usize,
    pub recent_intakes: usize,
    /// One entry per status, in `AdoptionStatus::ALL` order
    pub by_status: Vec<StatusShare>,
    /// Newest intakes first
    pub recent_cats: Vec<CatRecord>,
}

impl DashboardSummary {
    /// Summarize `cats` as of `today`.
    ///
    /// A cat counts as a recent intake when its intake date is no earlier
    /// than `recent_days` before `today`. `recent_cats` keeps at most
    /// `recent_limit` records, ordered by intake date descending; equal
    /// dates keep collection order.
    pub fn from_cats(
        cats: &[CatRecord],
        today: NaiveDate,
        recent_days: u32,
        recent_limit: usize,
    ) -> Self {
        let total = cats.len();
        let count_of =
            |status: AdoptionStatus| cats.iter().filter(|c| c.adoption_status == status).count();

        // A window reaching past the earliest representable date covers everything
        let cutoff = today.checked_sub_signed(Duration::days(i64::from(recent_days)));
        let recent_intakes = cats
            .iter()
            .filter(|c| cutoff.map_or(true, |cutoff| c.intake_date >= cutoff))
            .count();

        let by_status = AdoptionStatus::ALL
            .iter()
            .map(|&status| {
                let count = count_of(status);
                let percentage = if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                StatusShare {
                    status,
                    count,
                    percentage,
                }
            })
            .collect();

        let mut recent_cats: Vec<CatRecord> = cats.to_vec();
        // Stable sort keeps collection order for equal dates.
        recent_cats.sort_by(|a, b| b.intake_date.cmp(&a.intake_date));
        recent_cats.truncate(recent_limit);

        DashboardSummary {
            total,
            available: count_of(AdoptionStatus::Available),
            adopted: count_of(AdoptionStatus::Adopted),
            recent_intakes,
            by_status,
            recent_cats,
        }
    }
}
