//! Detail modal: Overview and Scores tabs for one combined result.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::app::{DetailTab, DetailView};
use crate::domain::{format_delta, format_score, format_timestamp, skill_breakdown, SkillScore};
use crate::models::CombinedLearningResult;
use crate::ui::components::{render_dialog_frame, render_tab_selector, DialogFrameConfig, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{skill_color, COLOR_DANGER, COLOR_DIM, COLOR_SUCCESS};

pub const NOT_SET: &str = "Not set";

const TABS: [TabItem<'static>; 2] = [
    TabItem {
        label: "Overview",
        short_label: "Overview",
    },
    TabItem {
        label: "Scores",
        short_label: "Scores",
    },
];

/// Rows per skill on the Scores tab: heading, bar, previous score.
const SKILL_ROWS: u16 = 3;

fn or_not_set(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_SET.to_string(),
    }
}

/// Label/value pairs for the Overview tab.
pub fn overview_fields(row: &CombinedLearningResult) -> Vec<(&'static str, String)> {
    vec![
        ("Result ID", row.result.id.to_string()),
        ("Updated", format_timestamp(&row.result.last_updated)),
        ("User", row.user.name.clone()),
        ("Email", row.user.email.clone()),
        ("English level", or_not_set(row.user.englishlevel.as_deref())),
        ("Specialization", or_not_set(row.user.speci_field.as_deref())),
        ("Phone", or_not_set(row.user.phone.as_deref())),
    ]
}

pub fn render_detail_modal(frame: &mut Frame, area: Rect, detail: &DetailView, ctx: &LayoutContext) {
    // tabs + spacer + the taller of the two tab bodies
    let content_height = 2 + SKILL_ROWS * 4;
    let config = DialogFrameConfig::new("Learning result details", content_height)
        .min_width(44)
        .max_width(72);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let [tabs_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(render_tab_selector(&TABS, detail.tab.index(), true, ctx)),
        tabs_area,
    );

    match detail.tab {
        DetailTab::Overview => render_overview(frame, body_area, &detail.row),
        DetailTab::Scores => render_scores(frame, body_area, &detail.row),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, row: &CombinedLearningResult) {
    let lines: Vec<Line> = overview_fields(row)
        .into_iter()
        .map(|(label, value)| {
            let value_style = if value == NOT_SET {
                Style::default().fg(COLOR_DIM)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_scores(frame: &mut Frame, area: Rect, row: &CombinedLearningResult) {
    let skills = skill_breakdown(&row.result);
    let areas = Layout::vertical(skills.iter().map(|_| Constraint::Length(SKILL_ROWS))).split(area);

    for (skill, skill_area) in skills.iter().zip(areas.iter()) {
        render_skill(frame, *skill_area, skill);
    }
}

fn render_skill(frame: &mut Frame, area: Rect, score: &SkillScore) {
    let [heading_area, bar_area, previous_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut heading = vec![
        Span::styled(
            format!("{:<12}", score.skill.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_score(score.value),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(delta) = format_delta(score.progress) {
        let color = if score.progress > 0.0 {
            COLOR_SUCCESS
        } else {
            COLOR_DANGER
        };
        heading.push(Span::styled(format!("  {}", delta), Style::default().fg(color)));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), heading_area);

    let bar_color = if score.is_exception() {
        COLOR_DANGER
    } else {
        skill_color(score.skill)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(bar_color))
        .ratio(score.percent() / 100.0)
        .label("")
        .use_unicode(true);
    frame.render_widget(gauge, bar_area);

    if score.shows_previous() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Previous score: {}", format_score(score.previous)),
                Style::default().fg(COLOR_DIM),
            )),
            previous_area,
        );
    }
}
