//! Error types for catshelter

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::CatValidationError;

/// Failures of the durable key-value storage collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Failed to read storage key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode collection for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Main error type for catshelter application
#[derive(Debug, Error)]
pub enum ShelterError {
    #[error("Not a catshelter directory: {0}")]
    NotShelterDirectory(PathBuf),

    #[error("Cat not found: {0}")]
    CatNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid adoption status: {0}")]
    InvalidAdoptionStatus(String),

    #[error("Invalid cat data: {}", format_violations(.0))]
    Validation(Vec<CatValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn format_violations(violations: &[CatValidationError]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ShelterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelterError::NotShelterDirectory(_) => 2,
            ShelterError::CatNotFound(_) => 3,
            ShelterError::InvalidDate(_)
            | ShelterError::InvalidAdoptionStatus(_)
            | ShelterError::Validation(_) => 4,
            ShelterError::Storage(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShelterError::NotShelterDirectory(path) => {
                format!(
                    "Not a catshelter directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'catshelter init' in this directory to create a new shelter\n\
                    • Navigate to an existing shelter directory\n\
                    • Set CATSHELTER_ROOT environment variable to your shelter path",
                    path.display()
                )
            }
            ShelterError::CatNotFound(id) => {
                format!(
                    "Cat not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'catshelter list' to see all cats and their ids\n\
                    • Ids are matched exactly, including case",
                    id
                )
            }
            ShelterError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: catshelter add --intake-date 2025-01-17 ...",
                    value
                )
            }
            ShelterError::InvalidAdoptionStatus(value) => {
                format!(
                    "Invalid adoption status: '{}'\n\n\
                    Valid statuses: available, adopted, pending, foster\n\
                    Example: catshelter list --status available",
                    value
                )
            }
            ShelterError::Validation(violations) => {
                let mut msg = String::from("Invalid cat data:\n");
                for violation in violations {
                    msg.push_str(&format!("• {}\n", violation));
                }
                msg
            }
            ShelterError::Storage(err) => {
                format!(
                    "{}\n\n\
                    Changes were applied in memory but could not be saved.\n\
                    Suggestions:\n\
                    • Check that .catshelter/storage is writable\n\
                    • Check available disk space",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShelterError
pub type Result<T> = std::result::Result<T, ShelterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_shelter_directory_suggestion() {
        let err = ShelterError::NotShelterDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("catshelter init"));
        assert!(msg.contains("CATSHELTER_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_cat_not_found_suggestions() {
        let err = ShelterError::CatNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("catshelter list"));
    }

    #[test]
    fn test_invalid_status_lists_valid_values() {
        let err = ShelterError::InvalidAdoptionStatus("lost".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("available, adopted, pending, foster"));
    }

    #[test]
    fn test_validation_lists_every_violation() {
        let err = ShelterError::Validation(vec![
            CatValidationError::BlankField("name"),
            CatValidationError::NegativeNumber {
                field: "age",
                value: -1.0,
            },
        ]);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("name must not be blank"));
        assert!(msg.contains("age must be a non-negative number"));
        assert!(err.to_string().contains("; "));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShelterError::NotShelterDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(ShelterError::CatNotFound("x".into()).exit_code(), 3);
        assert_eq!(ShelterError::InvalidDate("x".into()).exit_code(), 4);
        assert_eq!(
            ShelterError::Storage(StorageError::InvalidKey("".into())).exit_code(),
            5
        );
        assert_eq!(ShelterError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ShelterError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad key");
    }
}
