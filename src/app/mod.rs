//! Application state.
//!
//! `App` owns every piece of UI state. Network work happens in spawned tasks
//! (see `actions`) that report back through [`AppMessage`]; the main loop
//! feeds those into [`App::handle_message`] and commands decoded from key
//! events into `App::execute_command`.

mod actions;
mod handlers;
mod messages;
pub mod pagination;
pub mod sequencer;
mod types;

pub use messages::AppMessage;
pub use pagination::{Pagination, PAGE_SIZE_OPTIONS, PAGINATION_THRESHOLD};
pub use sequencer::{RequestSequencer, RequestToken};
pub use types::{DetailTab, DetailView, LoadState, Screen, UserSelector, UsersState};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{AdminApi, RequestContext};
use crate::models::{CombinedLearningResult, DashboardSummary, ResultTarget, User};

pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes; the main loop redraws and clears it
    pub needs_redraw: bool,
    pub screen: Screen,
    /// Tick counter for the spinner
    pub tick_count: u64,

    pub summary: DashboardSummary,

    /// Last fetched user list. Shared with in-flight fetches as a snapshot.
    pub users: Arc<[User]>,
    pub users_state: UsersState,
    /// Current selector value
    pub target: ResultTarget,
    pub results: Vec<CombinedLearningResult>,
    pub results_state: LoadState,
    /// Absolute index into `results`
    pub selected_row: usize,
    pub pagination: Pagination,
    pub selector: UserSelector,
    pub detail: Option<DetailView>,

    results_mounted: bool,
    users_requests: RequestSequencer,
    results_requests: RequestSequencer,

    api: AdminApi,
    ctx: RequestContext,

    /// Receiver for async messages; the main loop takes it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(api: AdminApi, ctx: RequestContext) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            needs_redraw: true,
            screen: Screen::default(),
            tick_count: 0,
            summary: DashboardSummary::default(),
            users: Arc::from(Vec::new()),
            users_state: UsersState::default(),
            target: ResultTarget::default(),
            results: Vec::new(),
            results_state: LoadState::default(),
            selected_row: 0,
            pagination: Pagination::default(),
            selector: UserSelector::default(),
            detail: None,
            results_mounted: false,
            users_requests: RequestSequencer::new(),
            results_requests: RequestSequencer::new(),
            api,
            ctx,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only dirties the frame while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    /// Whether the results card should show its spinner.
    pub fn is_loading(&self) -> bool {
        self.results_state.is_loading() || self.users_state == UsersState::Loading
    }

    /// Show `screen`, mounting the results screen on first visit.
    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::LearningResults && !self.results_mounted {
            self.results_mounted = true;
            self.fetch_users();
        }
        self.mark_dirty();
    }

    /// Re-issue the requests behind the current screen.
    pub fn refresh(&mut self) {
        match self.screen {
            Screen::Dashboard => self.load_summary(),
            Screen::LearningResults => {
                if self.users_state == UsersState::Ready {
                    self.fetch_learning_results(self.target);
                } else {
                    self.fetch_users();
                }
            }
        }
        self.mark_dirty();
    }

    /// Whether pagination controls are shown for the current rows.
    pub fn pagination_visible(&self) -> bool {
        Pagination::is_visible(self.target, self.results.len())
    }

    /// Rows on screen: the current page, or everything when unpaginated.
    pub fn visible_rows(&self) -> &[CombinedLearningResult] {
        if self.pagination_visible() {
            &self.results[self.pagination.range(self.results.len())]
        } else {
            &self.results
        }
    }

    /// Index of the selected row within [`App::visible_rows`].
    pub fn selected_visible_index(&self) -> Option<usize> {
        if self.results.is_empty() {
            return None;
        }
        if self.pagination_visible() {
            let range = self.pagination.range(self.results.len());
            range
                .contains(&self.selected_row)
                .then(|| self.selected_row - range.start)
        } else {
            Some(self.selected_row.min(self.results.len() - 1))
        }
    }

    pub fn selected_result(&self) -> Option<&CombinedLearningResult> {
        self.results.get(self.selected_row)
    }

    /// Change the selector value. Fetches only when the value actually
    /// changes and the user list is ready.
    pub fn select_target(&mut self, target: ResultTarget) {
        if target == self.target {
            return;
        }
        self.target = target;
        if self.users_state == UsersState::Ready {
            self.fetch_learning_results(target);
        }
        self.mark_dirty();
    }

    /// Selector entry for the current target: 0 for all users, `i + 1` for `users[i]`.
    fn target_cursor(&self) -> usize {
        match self.target {
            ResultTarget::AllUsers => 0,
            ResultTarget::User(id) => self
                .users
                .iter()
                .position(|u| u.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    pub fn open_selector(&mut self) {
        self.selector = UserSelector {
            visible: true,
            cursor: self.target_cursor(),
        };
        self.mark_dirty();
    }

    pub fn close_selector(&mut self) {
        self.selector.visible = false;
        self.mark_dirty();
    }

    pub fn move_selector(&mut self, delta: isize) {
        let entries = self.users.len() + 1;
        self.selector.cursor = step(self.selector.cursor, delta, entries);
        self.mark_dirty();
    }

    /// Apply the highlighted selector entry and close the popup.
    pub fn confirm_selector(&mut self) {
        let target = match self.selector.cursor {
            0 => ResultTarget::AllUsers,
            n => match self.users.get(n - 1) {
                Some(user) => ResultTarget::User(user.id),
                None => ResultTarget::AllUsers,
            },
        };
        self.selector.visible = false;
        self.select_target(target);
        self.mark_dirty();
    }

    /// Ignored while a fetch is in flight; the rows on hand are about to be
    /// replaced and the table is hidden behind the spinner.
    pub fn move_row(&mut self, delta: isize) {
        if self.results.is_empty() || self.is_loading() {
            return;
        }
        self.selected_row = step(self.selected_row, delta, self.results.len());
        if self.pagination_visible() {
            self.pagination.show_row(self.selected_row);
        }
        self.mark_dirty();
    }

    pub fn next_page(&mut self) {
        if self.pagination_visible() && self.pagination.next_page(self.results.len()) {
            self.selected_row = self.pagination.range(self.results.len()).start;
            self.mark_dirty();
        }
    }

    pub fn prev_page(&mut self) {
        if self.pagination_visible() && self.pagination.prev_page() {
            self.selected_row = self.pagination.range(self.results.len()).start;
            self.mark_dirty();
        }
    }

    pub fn cycle_page_size(&mut self) {
        if self.pagination_visible() {
            self.pagination.cycle_page_size(self.selected_row);
            self.mark_dirty();
        }
    }

    /// Open the detail modal on the selected row. No network call, and
    /// nothing to open while the rows are being replaced.
    pub fn open_detail(&mut self) {
        if self.is_loading() {
            return;
        }
        if let Some(row) = self.selected_result() {
            self.detail = Some(DetailView {
                row: row.clone(),
                tab: DetailTab::default(),
            });
            self.mark_dirty();
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.mark_dirty();
    }

    pub fn toggle_detail_tab(&mut self) {
        if let Some(detail) = &mut self.detail {
            detail.tab = detail.tab.toggle();
            self.mark_dirty();
        }
    }
}

/// Move `current` by `delta` within `0..len`, saturating at both ends.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_saturates() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(4, 1, 5), 4);
        assert_eq!(step(2, 1, 5), 3);
        assert_eq!(step(3, -2, 5), 1);
        assert_eq!(step(0, 1, 0), 0);
    }
}
