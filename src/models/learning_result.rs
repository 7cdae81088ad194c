use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_f64, deserialize_nullable_string};

/// One per-user snapshot of the four skill scores (0-5 scale).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningResult {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub listening_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub speaking_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub reading_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub writing_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub previous_listening_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub previous_speaking_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub previous_reading_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub previous_writing_score: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub listening_progress: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub speaking_progress: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub reading_progress: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub writing_progress: f64,
    #[serde(default, deserialize_with = "deserialize_nullable_f64")]
    pub overall_progress: f64,
    /// Owner of the snapshot. The per-user endpoint may omit it.
    #[serde(default)]
    pub user_id: Option<i64>,
}
