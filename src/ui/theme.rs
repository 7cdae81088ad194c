//! Color theme constants for the admin console.
//!
//! Defines the minimal dark palette plus the score tier and skill accent colors.

use ratatui::style::Color;

use crate::domain::{ScoreTier, Skill};

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected table row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 35, 60);

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Positive delta
pub const COLOR_SUCCESS: Color = Color::Rgb(82, 196, 26); // #52c41a

/// Negative delta, failed bars
pub const COLOR_DANGER: Color = Color::Rgb(255, 77, 79); // #ff4d4f

// ============================================================================
// Score Tiers
// ============================================================================

pub const COLOR_TIER_LOW: Color = Color::Red;
pub const COLOR_TIER_MEDIUM: Color = Color::Rgb(255, 165, 0); // orange
pub const COLOR_TIER_HIGH: Color = Color::Green;

pub fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::Low => COLOR_TIER_LOW,
        ScoreTier::Medium => COLOR_TIER_MEDIUM,
        ScoreTier::High => COLOR_TIER_HIGH,
    }
}

// ============================================================================
// Skill Accents (detail modal bars)
// ============================================================================

pub fn skill_color(skill: Skill) -> Color {
    match skill {
        Skill::Reading => Color::Rgb(45, 183, 245),   // #2db7f5
        Skill::Listening => Color::Rgb(135, 208, 104), // #87d068
        Skill::Writing => Color::Rgb(16, 142, 233),   // #108ee9
        Skill::Speaking => Color::Rgb(255, 85, 0),    // #f50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors() {
        assert_eq!(tier_color(ScoreTier::classify(1.9)), Color::Red);
        assert_eq!(tier_color(ScoreTier::classify(2.0)), COLOR_TIER_MEDIUM);
        assert_eq!(tier_color(ScoreTier::classify(3.5)), Color::Green);
    }
}
