//! Data model for the admin console.
//!
//! - [`User`] and [`LearningResult`] mirror backend JSON (camelCase).
//! - [`CombinedLearningResult`] is built client-side by [`join_results`].
//! - [`DashboardSummary`] holds the dashboard counters.

mod combined;
mod learning_result;
mod summary;
mod target;
mod user;

pub use combined::{join_results, CombinedLearningResult, JoinOutcome};
pub use learning_result::LearningResult;
pub use summary::{DashboardSummary, SummaryTile, SPECIALIZATION_COUNT};
pub use target::{ResultTarget, ALL_USERS};
pub use user::{User, UNKNOWN_USER_NAME};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string.
/// Handles both missing fields and explicit null values.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize nullable numbers as 0.0.
pub(crate) fn deserialize_nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
