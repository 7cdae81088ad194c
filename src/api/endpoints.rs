//! Backend paths, relative to the configured base URL.

use crate::models::{ResultTarget, SummaryTile};

pub const USERS: &str = "/api/v1/users";
pub const COURSES: &str = "/api/v1/courses";
pub const QUESTIONS: &str = "/api/v1/questions?point=5";
pub const LESSONS: &str = "/api/v1/lessons";
pub const ADMIN_LEARNING_RESULTS: &str = "/api/v1/admin/learning-results";

/// Path backing one dashboard counter.
pub fn count_path(tile: SummaryTile) -> &'static str {
    match tile {
        SummaryTile::Users => USERS,
        SummaryTile::Courses => COURSES,
        SummaryTile::Questions => QUESTIONS,
        SummaryTile::Lessons => LESSONS,
    }
}

/// The aggregate endpoint for [`ResultTarget::AllUsers`], the per-user one otherwise.
pub fn learning_results_path(target: ResultTarget) -> String {
    match target {
        ResultTarget::AllUsers => ADMIN_LEARNING_RESULTS.to_string(),
        ResultTarget::User(id) => format!("/api/v1/learning-results/user/{}", id),
    }
}
