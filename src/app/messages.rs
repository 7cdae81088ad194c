//! AppMessage enum for async communication within the application.

use super::sequencer::RequestToken;
use crate::models::{CombinedLearningResult, ResultTarget, SummaryTile, User};

/// Messages sent from spawned fetch tasks back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A dashboard counter request succeeded
    CountLoaded { tile: SummaryTile, value: u64 },
    /// A dashboard counter request failed; the counter keeps its value
    CountFailed { tile: SummaryTile, error: String },
    /// User list fetched
    UsersLoaded {
        token: RequestToken,
        users: Vec<User>,
    },
    /// User list fetch failed
    UsersFailed { token: RequestToken, error: String },
    /// Learning results fetched and joined
    ResultsLoaded {
        token: RequestToken,
        target: ResultTarget,
        rows: Vec<CombinedLearningResult>,
    },
    /// Learning results fetch failed (any cause)
    ResultsFailed {
        token: RequestToken,
        target: ResultTarget,
        error: String,
    },
}
