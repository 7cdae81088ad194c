//! Configuration errors.

use thiserror::Error;

use super::ErrorCategory;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("missing value after {0}")]
    MissingFlagValue(String),
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}
