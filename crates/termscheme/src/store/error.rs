//! Preference store errors.

use thiserror::Error;

/// Error returned when a preference store refuses a write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the value
    #[error("store rejected '{value}' for '{key}': {reason}")]
    Rejected {
        key: String,
        value: String,
        reason: String,
    },
    /// The store could not be written to
    #[error("failed to write preference '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn rejected(key: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        StoreError::Rejected {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The key whose write failed.
    pub fn key(&self) -> &str {
        match self {
            StoreError::Rejected { key, .. } | StoreError::Io { key, .. } => key,
        }
    }
}
