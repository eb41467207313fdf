//! Error types for the test harness
//!
//! Every failure carries the identifying key (field key, test id, dataset
//! name, or environment name) needed to diagnose it without inspecting
//! internals. Nothing in the core retries; retry policy belongs to the
//! test runner.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test harness
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Unknown environment '{name}'. Searched: {searched}")]
    UnknownEnvironment { name: String, searched: String },

    #[error("Missing required configuration key '{key}' for environment '{environment}'")]
    MissingRequiredKey { key: String, environment: String },

    #[error("Invalid configuration file '{path}': {error}")]
    ConfigParse { path: String, error: String },

    // === Data Resolution Errors ===
    #[error("Test id '{0}' not found in the test mapping. Run 'uitest data list' to see mapped tests")]
    UnknownTestId(String),

    #[error("Data file not found: '{path}'")]
    DataFileNotFound { path: String },

    #[error("Failed to parse data file '{path}': {error}")]
    DataFileParse { path: String, error: String },

    #[error("Dataset '{dataset}' not found in '{file}'. Available: {available}")]
    UnknownDataset {
        file: String,
        dataset: String,
        available: String,
    },

    // === Dispatch Errors ===
    #[error("Unsupported field kind '{kind}' for field '{key}'")]
    UnsupportedFieldKind { key: String, kind: String },

    #[error("Duplicate field key '{0}' in field mapping")]
    DuplicateFieldKey(String),

    #[error("Field '{0}' is not declared in the page's field mapping")]
    UnknownField(String),

    #[error("Field '{key}' expects {expected}")]
    InvalidFieldValue { key: String, expected: String },

    #[error("Element not found for field '{key}' (locator '{locator}')")]
    ElementNotFound { key: String, locator: String },

    #[error("Element not interactable for field '{key}' (locator '{locator}')")]
    ElementNotInteractable { key: String, locator: String },

    // === API Errors ===
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown environment error with the paths that were searched
    pub fn unknown_environment<S: AsRef<str>>(name: &str, searched: &[S]) -> Self {
        Self::UnknownEnvironment {
            name: name.to_string(),
            searched: searched
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create an unknown dataset error listing the datasets the file does contain
    pub fn unknown_dataset<S: AsRef<str>>(file: &str, dataset: &str, available: &[S]) -> Self {
        Self::UnknownDataset {
            file: file.to_string(),
            dataset: dataset.to_string(),
            available: available
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Create an element-not-found error for a locator
    ///
    /// Drivers do not know logical field keys; the dispatcher attaches the
    /// key with [`Error::with_field_key`] before propagating.
    pub fn element_not_found(locator: &str) -> Self {
        Self::ElementNotFound {
            key: String::new(),
            locator: locator.to_string(),
        }
    }

    /// Create an element-not-interactable error for a locator
    pub fn element_not_interactable(locator: &str) -> Self {
        Self::ElementNotInteractable {
            key: String::new(),
            locator: locator.to_string(),
        }
    }

    /// Attach the logical field key to a locator-level driver error
    ///
    /// Keeps failures attributable to a specific logical field rather than
    /// a raw locator string. Errors that already identify their subject are
    /// passed through unchanged.
    pub fn with_field_key(self, key: &str) -> Self {
        match self {
            Self::ElementNotFound { locator, .. } => Self::ElementNotFound {
                key: key.to_string(),
                locator,
            },
            Self::ElementNotInteractable { locator, .. } => Self::ElementNotInteractable {
                key: key.to_string(),
                locator,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_key_fills_in_driver_errors() {
        let err = Error::element_not_found("#email").with_field_key("email");
        match err {
            Error::ElementNotFound { key, locator } => {
                assert_eq!(key, "email");
                assert_eq!(locator, "#email");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn with_field_key_leaves_other_errors_untouched() {
        let err = Error::UnknownTestId("t1".to_string()).with_field_key("email");
        assert!(matches!(err, Error::UnknownTestId(id) if id == "t1"));
    }

    #[test]
    fn unknown_environment_lists_searched_paths() {
        let err = Error::unknown_environment("qa", &["config/qa.toml"]);
        let msg = err.to_string();
        assert!(msg.contains("qa"));
        assert!(msg.contains("config/qa.toml"));
    }
}
