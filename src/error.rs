//! Error types for the fallible edges of the game
//!
//! Gameplay endings are not errors (see [`crate::sim::GameOverCause`]);
//! only configuration loading can fail.

use thiserror::Error;

/// Failure to load or validate [`crate::Settings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings text is not valid JSON for the settings schema
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of its allowed range
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
