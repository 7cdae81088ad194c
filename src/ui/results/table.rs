//! Results card: table, spinner or empty state, pagination footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::domain::{format_score, format_timestamp, ScoreTier};
use crate::models::CombinedLearningResult;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{tier_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};

pub const EMPTY_MESSAGE: &str = "No learning results for this user";

pub fn card_title(app: &App) -> &'static str {
    if app.target.is_all_users() {
        "All learning results"
    } else {
        "Learning results"
    }
}

/// Footer text, or `None` when pagination is hidden.
pub fn pagination_summary(app: &App) -> Option<String> {
    if !app.pagination_visible() {
        return None;
    }
    let total = app.results.len();
    Some(format!(
        "Total {} results   Page {}/{}   {} / page",
        total,
        app.pagination.page() + 1,
        app.pagination.page_count(total),
        app.pagination.page_size()
    ))
}

fn score_cell(score: f64) -> Cell<'static> {
    Cell::from(Span::styled(
        format_score(score),
        Style::default()
            .fg(tier_color(ScoreTier::classify(score)))
            .add_modifier(Modifier::BOLD),
    ))
}

fn result_row(row: &CombinedLearningResult, show_email: bool) -> Row<'static> {
    let mut cells = vec![
        Cell::from(row.result.id.to_string()),
        Cell::from(row.user.name.clone()),
    ];
    if show_email {
        cells.push(Cell::from(row.user.email.clone()));
    }
    cells.push(Cell::from(format_timestamp(&row.result.last_updated)));
    cells.extend([
        score_cell(row.result.reading_score),
        score_cell(row.result.listening_score),
        score_cell(row.result.speaking_score),
        score_cell(row.result.writing_score),
    ]);
    Row::new(cells)
}

pub fn render_results_card(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", card_title(app)),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(format!(" Total: {} ", app.results.len())).right_aligned());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.is_loading() {
        let line = render_status_indicator(&StatusIndicatorType::spinner("Loading...", app.tick_count));
        frame.render_widget(Paragraph::new(line).centered(), centered_line(inner));
        return;
    }

    if app.results.is_empty() {
        let line = render_status_indicator(&StatusIndicatorType::info(EMPTY_MESSAGE));
        frame.render_widget(Paragraph::new(line).centered(), centered_line(inner));
        return;
    }

    let footer = pagination_summary(app);
    let [table_area, footer_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(if footer.is_some() { 1 } else { 0 }),
    ])
    .areas(inner);

    let show_email = ctx.show_email_column();
    let mut header = vec!["ID", "User"];
    let mut widths = vec![Constraint::Length(6), Constraint::Fill(2)];
    if show_email {
        header.push("Email");
        widths.push(Constraint::Fill(3));
    }
    header.extend(["Updated", "Reading", "Listening", "Speaking", "Writing"]);
    widths.extend([
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
    ]);

    let rows: Vec<Row> = app
        .visible_rows()
        .iter()
        .map(|row| result_row(row, show_email))
        .collect();

    let table = Table::new(rows, widths)
        .header(
            Row::new(header)
                .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD))
                .bottom_margin(0),
        )
        .row_highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(app.selected_visible_index());
    frame.render_stateful_widget(table, table_area, &mut state);

    if let Some(text) = footer {
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))).right_aligned(),
            footer_area,
        );
    }
}

/// One-row area in the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
