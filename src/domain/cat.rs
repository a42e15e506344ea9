//! Cat record model.
//!
//! # Invariants
//! - `id` is minted by the store and never changed afterwards.
//! - Serialized field names are camelCase and dates are `YYYY-MM-DD`, which
//!   is the layout of the persisted collection payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier of a cat record.
pub type CatId = String;

/// Health descriptors accepted by form validation. The store accepts any text.
pub const HEALTH_STATUSES: [&str; 4] = ["Excellent", "Good", "Fair", "Poor"];

/// Where a cat currently is in the shelter workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[default]
    Available,
    Adopted,
    Pending,
    Foster,
}

impl AdoptionStatus {
    /// Every status, in the fixed order used by filters and the dashboard.
    pub const ALL: [AdoptionStatus; 4] = [
        AdoptionStatus::Available,
        AdoptionStatus::Adopted,
        AdoptionStatus::Pending,
        AdoptionStatus::Foster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdoptionStatus::Available => "available",
            AdoptionStatus::Adopted => "adopted",
            AdoptionStatus::Pending => "pending",
            AdoptionStatus::Foster => "foster",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdoptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(AdoptionStatus::Available),
            "adopted" => Ok(AdoptionStatus::Adopted),
            "pending" => Ok(AdoptionStatus::Pending),
            "foster" => Ok(AdoptionStatus::Foster),
            _ => Err(format!(
                "Invalid adoption status: '{}'. Valid statuses are: available, adopted, pending, foster",
                s
            )),
        }
    }
}

/// A single animal and its shelter, health and adoption metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatRecord {
    pub id: CatId,
    pub name: String,
    /// Years, fractional allowed.
    pub age: f64,
    pub breed: String,
    pub color: String,
    /// Kilograms.
    pub weight: f64,
    pub health_status: String,
    pub neutered: bool,
    pub vaccinated: bool,
    pub adoption_status: AdoptionStatus,
    pub description: String,
    pub image_url: String,
    pub intake_date: NaiveDate,
    pub last_checkup: NaiveDate,
}

/// Field data for a cat that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCat {
    pub name: String,
    pub age: f64,
    pub breed: String,
    pub color: String,
    pub weight: f64,
    pub health_status: String,
    pub neutered: bool,
    pub vaccinated: bool,
    pub adoption_status: AdoptionStatus,
    pub description: String,
    pub image_url: String,
    pub intake_date: NaiveDate,
    pub last_checkup: NaiveDate,
}

/// A single violated intake-form rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatValidationError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("{field} must be a non-negative number (got {value})")]
    NegativeNumber { field: &'static str, value: f64 },

    #[error("healthStatus must be one of {} (got '{}')", HEALTH_STATUSES.join(", "), .0)]
    UnknownHealthStatus(String),
}

impl NewCat {
    /// Form defaults: health `Good`, status `available`, both dates `today`.
    pub fn with_defaults(name: impl Into<String>, today: NaiveDate) -> Self {
        NewCat {
            name: name.into(),
            age: 0.0,
            breed: String::new(),
            color: String::new(),
            weight: 0.0,
            health_status: "Good".to_string(),
            neutered: false,
            vaccinated: false,
            adoption_status: AdoptionStatus::Available,
            description: String::new(),
            image_url: String::new(),
            intake_date: today,
            last_checkup: today,
        }
    }

    /// Check the intake-form rules and return every violation found.
    ///
    /// The store itself never validates; this is for the input layer.
    pub fn validate(&self) -> Result<(), Vec<CatValidationError>> {
        let mut violations = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("breed", &self.breed),
            ("color", &self.color),
            ("imageUrl", &self.image_url),
        ] {
            if value.trim().is_empty() {
                violations.push(CatValidationError::BlankField(field));
            }
        }

        for (field, value) in [("age", self.age), ("weight", self.weight)] {
            if !value.is_finite() || value < 0.0 {
                violations.push(CatValidationError::NegativeNumber { field, value });
            }
        }

        if !HEALTH_STATUSES.contains(&self.health_status.as_str()) {
            violations.push(CatValidationError::UnknownHealthStatus(
                self.health_status.clone(),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Attach an id, producing a complete record.
    pub fn into_record(self, id: CatId) -> CatRecord {
        CatRecord {
            id,
            name: self.name,
            age: self.age,
            breed: self.breed,
            color: self.color,
            weight: self.weight,
            health_status: self.health_status,
            neutered: self.neutered,
            vaccinated: self.vaccinated,
            adoption_status: self.adoption_status,
            description: self.description,
            image_url: self.image_url,
            intake_date: self.intake_date,
            last_checkup: self.last_checkup,
        }
    }
}

impl From<&CatRecord> for NewCat {
    fn from(record: &CatRecord) -> Self {
        NewCat {
            name: record.name.clone(),
            age: record.age,
            breed: record.breed.clone(),
            color: record.color.clone(),
            weight: record.weight,
            health_status: record.health_status.clone(),
            neutered: record.neutered,
            vaccinated: record.vaccinated,
            adoption_status: record.adoption_status,
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            intake_date: record.intake_date,
            last_checkup: record.last_checkup,
        }
    }
}

/// Partial field changes for an existing record. `None` keeps the old value.
///
/// There is no `id` field, so an update can never re-key a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adoption_status: Option<AdoptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkup: Option<NaiveDate>,
}

impl CatUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == CatUpdate::default()
    }

    /// Overwrite the fields that are set, leaving the rest untouched.
    pub fn apply_to(&self, record: &mut CatRecord) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut record.name, &self.name);
        set(&mut record.age, &self.age);
        set(&mut record.breed, &self.breed);
        set(&mut record.color, &self.color);
        set(&mut record.weight, &self.weight);
        set(&mut record.health_status, &self.health_status);
        set(&mut record.neutered, &self.neutered);
        set(&mut record.vaccinated, &self.vaccinated);
        set(&mut record.adoption_status, &self.adoption_status);
        set(&mut record.description, &self.description);
        set(&mut record.image_url, &self.image_url);
        set(&mut record.intake_date, &self.intake_date);
        set(&mut record.last_checkup, &self.last_checkup);
    }
}
