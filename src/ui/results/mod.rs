//! Learning results screen
//!
//! ```text
//! +- Learning result filter -------------------------+
//! | User: All users                     [u] change   |
//! +--------------------------------------------------+
//! +- All learning results ------------- Total: 15 ---+
//! | ID  User   Email   Updated   Read  List ...      |
//! | ...                                              |
//! | Total 15 results   Page 1/2   10 / page          |
//! +--------------------------------------------------+
//! ```
//!
//! The user selector and the detail modal render on top as dialogs.

mod detail;
mod filter;
mod table;

pub use detail::{overview_fields, render_detail_modal, NOT_SET};
pub use filter::{render_filter_card, render_user_selector, selector_entries, ALL_USERS_LABEL};
pub use table::{card_title, pagination_summary, render_results_card, EMPTY_MESSAGE};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::ui::layout::LayoutContext;

pub fn render_results_screen(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let [filter_area, card_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    render_filter_card(frame, filter_area, app);
    render_results_card(frame, card_area, app, ctx);
}

/// Dialogs that float above the whole frame.
pub fn render_results_overlays(frame: &mut Frame, app: &App, ctx: &LayoutContext) {
    if app.selector.visible {
        render_user_selector(frame, frame.area(), app, ctx);
    }
    if let Some(detail) = &app.detail {
        render_detail_modal(frame, frame.area(), detail, ctx);
    }
}
