//! Filter card and user selector popup.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, UsersState};
use crate::models::ResultTarget;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};

pub const ALL_USERS_LABEL: &str = "All users";

/// Max selector rows before the list scrolls.
const SELECTOR_MAX_ROWS: u16 = 12;

/// Selector entries: "All users" followed by every user as `name (email)`.
pub fn selector_entries(app: &App) -> Vec<String> {
    std::iter::once(ALL_USERS_LABEL.to_string())
        .chain(app.users.iter().map(|u| u.selector_label()))
        .collect()
}

/// Label for the current target.
fn target_label(app: &App) -> String {
    match app.target {
        ResultTarget::AllUsers => ALL_USERS_LABEL.to_string(),
        ResultTarget::User(id) => app
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.selector_label())
            .unwrap_or_else(|| format!("User #{}", id)),
    }
}

pub fn render_filter_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Learning result filter ");

    let mut spans = vec![
        Span::styled("User: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(target_label(app), Style::default().fg(COLOR_ACCENT)),
    ];
    if app.users.is_empty() {
        let marker = match app.users_state {
            UsersState::Failed => "  (user list unavailable)",
            _ => "  (loading users...)",
        };
        spans.push(Span::styled(marker, Style::default().fg(COLOR_DIM)));
    }
    spans.push(Span::styled("   [u] change", Style::default().fg(COLOR_DIM)));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_user_selector(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let entries = selector_entries(app);
    let height = (entries.len() as u16).clamp(1, SELECTOR_MAX_ROWS);
    let config = DialogFrameConfig::new("Select user", height).max_width(70);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let items: Vec<ListItem> = entries.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selector.cursor));
    frame.render_stateful_widget(list, inner, &mut state);
}
