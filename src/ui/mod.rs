//! UI rendering for the admin console
//!
//! ```text
//! +--------------------------------------------------------------+
//! | ENCYBARA ADMIN   ▶ Dashboard    Learning results              |
//! +--------------------------------------------------------------+
//! | screen body (dashboard tiles or results cards)               |
//! |                                                              |
//! +--------------------------------------------------------------+
//! | [q] quit  [tab] switch screen  [r] refresh ...               |
//! +--------------------------------------------------------------+
//! ```
//!
//! All render functions receive a `LayoutContext` for responsive sizing.

pub mod components;
pub mod dashboard;
pub mod layout;
pub mod results;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::input::{Command, ModalType};
use components::{render_tab_selector, TabItem};
use dashboard::render_dashboard;
use results::{render_results_overlays, render_results_screen};
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

const APP_TITLE: &str = "ENCYBARA ADMIN";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &ctx);

    match app.screen {
        Screen::Dashboard => render_dashboard(frame, body_area, app, &ctx),
        Screen::LearningResults => render_results_screen(frame, body_area, app, &ctx),
    }

    render_help_line(frame, help_area, app);

    if app.screen == Screen::LearningResults {
        render_results_overlays(frame, app, &ctx);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let tabs = [
        TabItem::with_short_label("Dashboard", "Dash"),
        TabItem::with_short_label("Learning results", "Results"),
    ];

    let mut spans = vec![Span::styled(
        APP_TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(render_tab_selector(&tabs, app.screen.index(), true, ctx).spans);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current context.
pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let bindings: Vec<(&'static str, Command)> = match app.build_input_context().modal {
        ModalType::Detail => vec![("←/→", Command::NextDetailTab), ("esc", Command::CloseDetail)],
        ModalType::UserSelector => vec![
            ("↑/↓", Command::SelectorDown),
            ("enter", Command::ConfirmSelector),
            ("esc", Command::CloseSelector),
        ],
        ModalType::None => {
            let mut bindings = vec![
                ("q", Command::Quit),
                ("tab", Command::NextScreen),
                ("r", Command::Refresh),
            ];
            if app.screen == Screen::LearningResults {
                bindings.extend([
                    ("u", Command::OpenSelector),
                    ("↑/↓", Command::MoveDown),
                    ("enter", Command::OpenDetail),
                ]);
                if app.pagination_visible() {
                    bindings.extend([
                        ("n", Command::NextPage),
                        ("p", Command::PrevPage),
                        ("s", Command::CyclePageSize),
                    ]);
                }
            }
            bindings
        }
    };
    bindings
        .into_iter()
        .map(|(key, cmd)| (key, cmd.description()))
        .collect()
}

fn render_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let spans: Vec<Span> = help_hints(app)
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!("[{}] ", key), Style::default().fg(COLOR_ACCENT)),
                Span::styled(format!("{}  ", label), Style::default().fg(COLOR_DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
