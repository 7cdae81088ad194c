//! Message handler for async task results.

use std::sync::Arc;

use tracing::debug;

use super::types::{LoadState, UsersState};
use super::{App, AppMessage};
use crate::models::ResultTarget;

impl App {
    /// Apply one message from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::CountLoaded { tile, value } => {
                self.summary.set(tile, value);
            }
            AppMessage::CountFailed { tile, error } => {
                // Counter keeps its previous value; the failure was logged at the source.
                debug!(tile = tile.title(), %error, "counter left unchanged");
            }
            AppMessage::UsersLoaded { token, users } => {
                if !self.users_requests.is_current(token) {
                    debug!(token = token.value(), "dropping stale user list");
                    return;
                }
                self.users = Arc::from(users);
                self.users_state = UsersState::Ready;
                self.target = ResultTarget::AllUsers;
                self.selector.cursor = 0;
                self.fetch_learning_results(ResultTarget::AllUsers);
            }
            AppMessage::UsersFailed { token, error } => {
                if !self.users_requests.is_current(token) {
                    debug!(token = token.value(), "dropping stale user list failure");
                    return;
                }
                debug!(%error, "user list unavailable");
                self.users_state = UsersState::Failed;
                self.clear_results(LoadState::Failed);
            }
            AppMessage::ResultsLoaded { token, target, rows } => {
                if !self.results_requests.is_current(token) {
                    debug!(token = token.value(), target_filter = %target, "dropping stale results");
                    return;
                }
                self.results = rows;
                self.results_state = LoadState::Loaded;
                self.selected_row = 0;
                self.pagination.reset();
            }
            AppMessage::ResultsFailed {
                token,
                target,
                error,
            } => {
                if !self.results_requests.is_current(token) {
                    debug!(token = token.value(), target_filter = %target, "dropping stale failure");
                    return;
                }
                debug!(%error, "results cleared after failure");
                self.clear_results(LoadState::Failed);
            }
        }
    }

    fn clear_results(&mut self, state: LoadState) {
        self.results.clear();
        self.results_state = state;
        self.selected_row = 0;
        self.pagination.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::api::{AdminApi, RequestContext};
    use crate::models::{CombinedLearningResult, LearningResult, SummaryTile, User};

    fn app() -> App {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, serde_json::json!({"data": []})));
        App::new(
            AdminApi::new(Arc::new(mock)),
            RequestContext::new("http://api.test"),
        )
    }

    fn rows(n: usize) -> Vec<CombinedLearningResult> {
        (0..n)
            .map(|i| CombinedLearningResult {
                result: LearningResult {
                    id: i as i64,
                    ..Default::default()
                },
                user: User::placeholder(0),
            })
            .collect()
    }

    #[test]
    fn test_count_loaded_and_failed() {
        let mut app = app();
        app.handle_message(AppMessage::CountLoaded {
            tile: SummaryTile::Courses,
            value: 9,
        });
        app.handle_message(AppMessage::CountFailed {
            tile: SummaryTile::Users,
            error: "boom".to_string(),
        });
        assert_eq!(app.summary.courses, 9);
        assert_eq!(app.summary.users, 0);
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_stale_results_are_dropped() {
        let mut app = app();
        app.fetch_learning_results(ResultTarget::User(1));
        let old = app.results_requests.last_issued();
        app.fetch_learning_results(ResultTarget::User(2));
        let current = app.results_requests.last_issued();

        app.handle_message(AppMessage::ResultsLoaded {
            token: current,
            target: ResultTarget::User(2),
            rows: rows(2),
        });
        app.handle_message(AppMessage::ResultsLoaded {
            token: old,
            target: ResultTarget::User(1),
            rows: rows(7),
        });

        assert_eq!(app.results.len(), 2);
        assert_eq!(app.results_state, LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_failure_clears_results() {
        let mut app = app();
        app.results = rows(3);
        app.fetch_learning_results(ResultTarget::AllUsers);
        let token = app.results_requests.last_issued();

        app.handle_message(AppMessage::ResultsFailed {
            token,
            target: ResultTarget::AllUsers,
            error: "HTTP 500".to_string(),
        });

        assert!(app.results.is_empty());
        assert_eq!(app.results_state, LoadState::Failed);
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn test_users_failure_marks_failed() {
        let mut app = app();
        app.fetch_users();
        let token = app.users_requests.last_issued();

        app.handle_message(AppMessage::UsersFailed {
            token,
            error: "refused".to_string(),
        });

        assert_eq!(app.users_state, UsersState::Failed);
        assert!(app.users.is_empty());
        assert!(!app.is_loading());
    }
}
