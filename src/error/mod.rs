//! Error types.
//!
//! - [`ApiError`]: a single admin API call failed (transport, status, decode)
//! - [`ConfigError`]: configuration could not be resolved
//! - [`ErrorCategory`]: coarse classification attached to log records
//!
//! Binary-level code uses `color_eyre::Result`; these types are what the
//! library hands back.

mod api;
mod category;
mod config;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use config::ConfigError;

/// Result alias for admin API calls.
pub type ApiResult<T> = Result<T, ApiError>;
