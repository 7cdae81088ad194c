//! Score classification and formatting shared by the table and detail views.

use crate::models::LearningResult;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 5.0;

/// Scores below this are shown in red and as an "exception" bar.
pub const LOW_THRESHOLD: f64 = 2.0;

/// Scores below this (and at/above [`LOW_THRESHOLD`]) are shown in orange.
pub const MEDIUM_THRESHOLD: f64 = 3.5;

/// Three-tier color band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// `< 2.0`, red
    Low,
    /// `< 3.5`, orange
    Medium,
    /// `>= 3.5`, green
    High,
}

impl ScoreTier {
    pub fn classify(score: f64) -> Self {
        if score < LOW_THRESHOLD {
            ScoreTier::Low
        } else if score < MEDIUM_THRESHOLD {
            ScoreTier::Medium
        } else {
            ScoreTier::High
        }
    }
}

/// Map a 0-5 score onto 0-100. Out-of-range input is clamped first; NaN maps to 0.
pub fn progress_percent(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE) * 20.0
}

/// Two-decimal rendering used everywhere a score is printed.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Signed delta, or `None` when there is nothing to show.
pub fn format_delta(delta: f64) -> Option<String> {
    if delta == 0.0 || delta.is_nan() {
        None
    } else if delta > 0.0 {
        Some(format!("+{}", format_score(delta)))
    } else {
        Some(format_score(delta))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Reading,
    Listening,
    Writing,
    Speaking,
}

impl Skill {
    /// Detail-view order.
    pub const ALL: [Skill; 4] = [Skill::Reading, Skill::Listening, Skill::Writing, Skill::Speaking];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::Reading => "Reading",
            Skill::Listening => "Listening",
            Skill::Writing => "Writing",
            Skill::Speaking => "Speaking",
        }
    }
}

/// One skill's row in the detail view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillScore {
    pub skill: Skill,
    pub value: f64,
    pub previous: f64,
    pub progress: f64,
}

impl SkillScore {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::classify(self.value)
    }

    pub fn percent(&self) -> f64 {
        progress_percent(self.value)
    }

    /// The bar switches to its exception style below [`LOW_THRESHOLD`].
    pub fn is_exception(&self) -> bool {
        self.value < LOW_THRESHOLD
    }

    /// The previous score is only worth showing when one was recorded.
    pub fn shows_previous(&self) -> bool {
        self.previous > 0.0
    }
}

pub fn skill_breakdown(result: &LearningResult) -> [SkillScore; 4] {
    Skill::ALL.map(|skill| {
        let (value, previous, progress) = match skill {
            Skill::Reading => (
                result.reading_score,
                result.previous_reading_score,
                result.reading_progress,
            ),
            Skill::Listening => (
                result.listening_score,
                result.previous_listening_score,
                result.listening_progress,
            ),
            Skill::Writing => (
                result.writing_score,
                result.previous_writing_score,
                result.writing_progress,
            ),
            Skill::Speaking => (
                result.speaking_score,
                result.previous_speaking_score,
                result.speaking_progress,
            ),
        };
        SkillScore {
            skill,
            value,
            previous,
            progress,
        }
    })
}
