//! A single counter tile.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Rows taken by one tile including borders.
pub const TILE_HEIGHT: u16 = 4;

pub fn render_tile(frame: &mut Frame, area: Rect, title: &str, value: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(COLOR_DIM)));

    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(body, area);
}
