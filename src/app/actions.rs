//! Fetch actions. Each one spawns a task that reports back through the
//! message channel; state is only ever touched by the UI task.

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{LoadState, UsersState};
use super::{App, AppMessage};
use crate::models::{ResultTarget, SummaryTile};

impl App {
    /// Mount the dashboard: issue the four counter requests.
    pub fn load_summary(&mut self) {
        for tile in SummaryTile::ALL {
            self.spawn_count(tile);
        }
    }

    fn spawn_count(&self, tile: SummaryTile) {
        let api = self.api.clone();
        let ctx = self.ctx.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let msg = match api.fetch_count(&ctx, tile).await {
                Ok(value) => AppMessage::CountLoaded { tile, value },
                Err(e) => {
                    warn!(
                        tile = tile.title(),
                        endpoint = e.endpoint(),
                        category = %e.category(),
                        "dashboard counter failed: {}",
                        e
                    );
                    AppMessage::CountFailed {
                        tile,
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Fetch the user list. Its arrival resets the selector and triggers the
    /// aggregate results fetch.
    pub fn fetch_users(&mut self) {
        let token = self.users_requests.issue();
        self.users_state = UsersState::Loading;
        self.results_state = LoadState::Loading;
        debug!(token = token.value(), "fetching users");

        let api = self.api.clone();
        let ctx = self.ctx.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let msg = match api.fetch_users(&ctx).await {
                Ok(users) => AppMessage::UsersLoaded { token, users },
                Err(e) => {
                    warn!(category = %e.category(), "failed to fetch users: {}", e);
                    AppMessage::UsersFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Fetch learning results for `target` and join them against the current
    /// user list snapshot.
    pub fn fetch_learning_results(&mut self, target: ResultTarget) {
        let token = self.results_requests.issue();
        self.results_state = LoadState::Loading;
        debug!(token = token.value(), target_filter = %target, "fetching learning results");

        let api = self.api.clone();
        let ctx = self.ctx.clone();
        let users = Arc::clone(&self.users);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let msg = match api.fetch_combined_results(&ctx, target, &users).await {
                Ok(outcome) => AppMessage::ResultsLoaded {
                    token,
                    target,
                    rows: outcome.rows,
                },
                Err(e) => {
                    warn!(
                        target_filter = %target,
                        endpoint = e.endpoint(),
                        category = %e.category(),
                        "failed to fetch learning results: {}",
                        e
                    );
                    AppMessage::ResultsFailed {
                        token,
                        target,
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(msg);
        });
    }
}
