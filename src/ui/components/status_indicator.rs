//! Status Indicator Component
//!
//! Spinner and empty-state lines for cards whose content is not available.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16ms tick rate.
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Dimmed informational line (empty states)
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: spinner_frame(tick),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner frame index for a tick count.
pub fn spinner_frame(tick: u64) -> usize {
    ((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            let glyph = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(
                    format!("{} ", glyph),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.clone(), Style::default().fg(COLOR_ACCENT)),
            ])
        }
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    }
}
