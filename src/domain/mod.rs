//! Presentation rules that do not depend on the terminal: score tiers,
//! percent scaling, delta and timestamp formatting.

pub mod scores;
pub mod time_fmt;

pub use scores::{
    format_delta, format_score, progress_percent, skill_breakdown, ScoreTier, Skill, SkillScore,
};
pub use time_fmt::format_timestamp;
