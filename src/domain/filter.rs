//! Predicate filter over cat records

use crate::domain::{AdoptionStatus, CatRecord};
use serde::{Deserialize, Serialize};

/// Optional predicates combined with logical AND.
///
/// Unset fields impose no constraint. Empty text is treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatFilter {
    /// Case-insensitive substring of the breed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adoption_status: Option<AdoptionStatus>,
    /// Inclusive lower bound on age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<f64>,
    /// Inclusive upper bound on age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<f64>,
    /// Case-insensitive substring of the health status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
}

impl CatFilter {
    /// True when the filter would accept every record.
    pub fn is_empty(&self) -> bool {
        text_term(&self.breed).is_none()
            && self.adoption_status.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && text_term(&self.health_status).is_none()
    }

    /// Check a record against every set predicate.
    pub fn matches(&self, cat: &CatRecord) -> bool {
        if let Some(breed) = text_term(&self.breed) {
            if !contains_ignore_case(&cat.breed, breed) {
                return false;
            }
        }
        if let Some(status) = self.adoption_status {
            if cat.adoption_status != status {
                return false;
            }
        }
        if let Some(min_age) = self.min_age {
            if cat.age < min_age {
                return false;
            }
        }
        if let Some(max_age) = self.max_age {
            if cat.age > max_age {
                return false;
            }
        }
        if let Some(health) = text_term(&self.health_status) {
            if !contains_ignore_case(&cat.health_status, health) {
                return false;
            }
        }
        true
    }

    /// Overlay the fields set in `other` on top of this filter.
    pub fn merge(&self, other: &CatFilter) -> CatFilter {
        CatFilter {
            breed: other.breed.clone().or_else(|| self.breed.clone()),
            adoption_status: other.adoption_status.or(self.adoption_status),
            min_age: other.min_age.or(self.min_age),
            max_age: other.max_age.or(self.max_age),
            health_status: other
                .health_status
                .clone()
                .or_else(|| self.health_status.clone()),
        }
    }
}

fn text_term(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
