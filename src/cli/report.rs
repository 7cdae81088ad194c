//! Non-interactive reports: `--summary` and `--results`.

use color_eyre::Result;
use tracing::warn;

use crate::api::{AdminApi, RequestContext};
use crate::cli_output::{
    fit_width, format_header, format_row, format_rule, format_step_line, icons, print_lines,
};
use crate::domain::{format_score, format_timestamp};
use crate::error::ApiResult;
use crate::models::{CombinedLearningResult, ResultTarget, SummaryTile, SPECIALIZATION_COUNT};

/// Dashboard counters as report lines. A failed counter prints as 0 with a
/// failure line underneath, matching the console's behavior.
pub fn summary_lines(outcomes: &[(SummaryTile, ApiResult<u64>)]) -> Vec<String> {
    let mut lines = format_header("ENCYBARA DASHBOARD");
    let mut failures = Vec::new();

    for (tile, outcome) in outcomes {
        let value = match outcome {
            Ok(value) => *value,
            Err(e) => {
                failures.push(format_step_line(
                    icons::FAILURE,
                    &format!("{}: {} ({})", tile.title(), e, e.category()),
                ));
                0
            }
        };
        lines.push(format_row(tile.title(), &value.to_string()));
    }
    lines.push(format_row("Specializations", &SPECIALIZATION_COUNT.to_string()));

    if !failures.is_empty() {
        lines.push(format_rule());
        lines.extend(failures);
    }
    lines
}

/// Terminal columns given to the user name in [`result_line`].
const NAME_COLUMNS: usize = 24;

/// One line per combined row.
pub fn result_line(row: &CombinedLearningResult) -> String {
    format!(
        "#{:<5} {} {:<16} R {} L {} S {} W {}",
        row.result.id,
        fit_width(&row.user.name, NAME_COLUMNS),
        format_timestamp(&row.result.last_updated),
        format_score(row.result.reading_score),
        format_score(row.result.listening_score),
        format_score(row.result.speaking_score),
        format_score(row.result.writing_score),
    )
}

pub fn results_lines(target: ResultTarget, rows: &[CombinedLearningResult]) -> Vec<String> {
    let title = match target {
        ResultTarget::AllUsers => "ALL LEARNING RESULTS".to_string(),
        ResultTarget::User(id) => format!("LEARNING RESULTS FOR USER {}", id),
    };
    let mut lines = format_header(&title);
    if rows.is_empty() {
        lines.push(format_step_line(icons::WARNING, "No learning results for this user"));
    } else {
        lines.extend(rows.iter().map(result_line));
    }
    lines.push(format_rule());
    lines.push(format!("Total: {}", rows.len()));
    lines
}

pub async fn run_summary(api: &AdminApi, ctx: &RequestContext) -> Result<()> {
    let outcomes = api.fetch_summary(ctx).await;
    for (tile, outcome) in &outcomes {
        if let Err(e) = outcome {
            warn!(tile = tile.title(), category = %e.category(), "dashboard counter failed: {}", e);
        }
    }
    print_lines(&summary_lines(&outcomes));
    Ok(())
}

/// Fetch users, then results for `target`, and print the joined rows.
/// Either failure is an error here; there is no empty-state fallback.
pub async fn run_results(api: &AdminApi, ctx: &RequestContext, target: ResultTarget) -> Result<()> {
    let users = api.fetch_users(ctx).await?;
    let outcome = api.fetch_combined_results(ctx, target, &users).await?;
    print_lines(&results_lines(target, &outcome.rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{LearningResult, User};

    #[test]
    fn test_summary_lines_zero_on_failure() {
        let outcomes = vec![
            (SummaryTile::Users, Ok(12)),
            (
                SummaryTile::Courses,
                Err(ApiError::Status {
                    endpoint: "/api/v1/courses".to_string(),
                    status: 500,
                }),
            ),
            (SummaryTile::Lessons, Ok(3)),
            (SummaryTile::Questions, Ok(40)),
        ];
        let lines = summary_lines(&outcomes);

        assert!(lines.contains(&format_row("Learners", "12")));
        assert!(lines.contains(&format_row("Courses", "0")));
        assert!(lines.contains(&format_row("Specializations", "4")));
        assert!(lines.last().unwrap().contains("Courses"));
        assert!(lines.last().unwrap().starts_with("  ✗"));
    }

    #[test]
    fn test_summary_lines_without_failures_has_no_rule() {
        let outcomes = SummaryTile::ALL.into_iter().map(|t| (t, Ok(1))).collect::<Vec<_>>();
        let lines = summary_lines(&outcomes);
        assert!(!lines.contains(&format_rule()));
        assert_eq!(lines.len(), 2 + 5);
    }

    #[test]
    fn test_results_lines() {
        let row = CombinedLearningResult {
            result: LearningResult {
                id: 7,
                reading_score: 4.0,
                listening_score: 1.5,
                last_updated: "2025-03-14T09:30:00".to_string(),
                ..Default::default()
            },
            user: User::placeholder(3),
        };
        let lines = results_lines(ResultTarget::User(3), std::slice::from_ref(&row));

        assert_eq!(lines[0], "LEARNING RESULTS FOR USER 3");
        assert!(lines[2].starts_with("#7 "));
        assert!(lines[2].contains("14/03/2025 09:30"));
        assert!(lines[2].contains("R 4.00 L 1.50"));
        assert_eq!(lines.last().unwrap(), "Total: 1");
    }

    #[test]
    fn test_results_lines_empty() {
        let lines = results_lines(ResultTarget::AllUsers, &[]);
        assert_eq!(lines[0], "ALL LEARNING RESULTS");
        assert!(lines[2].contains("No learning results"));
    }
}
