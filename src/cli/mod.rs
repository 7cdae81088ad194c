//! Command-line interface.
//!
//! `--version` and `--help` run before any configuration is loaded; the
//! report commands need a configured [`AdminApi`]; everything else starts
//! the TUI.
//!
//! ```ignore
//! let args = parse_args(std::env::args())?;
//! if run_info_command(args.command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod report;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use report::{run_results, run_summary};
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::Result;

use crate::api::{AdminApi, RequestContext};

/// Handle commands that need no configuration. Returns `true` if handled.
pub fn run_info_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            handle_version_command();
            true
        }
        CliCommand::Help => {
            handle_help_command();
            true
        }
        _ => false,
    }
}

/// Run a report command.
///
/// * `None` - the command is not a report (run the TUI)
/// * `Some(result)` - the report ran
pub async fn run_report_command(
    command: CliCommand,
    api: &AdminApi,
    ctx: &RequestContext,
) -> Option<Result<()>> {
    match command {
        CliCommand::Summary => Some(run_summary(api, ctx).await),
        CliCommand::Results(target) => Some(run_results(api, ctx, target).await),
        CliCommand::Version | CliCommand::Help | CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use std::sync::Arc;

    #[test]
    fn test_run_tui_is_not_info() {
        assert!(!run_info_command(CliCommand::RunTui));
        assert!(!run_info_command(CliCommand::Summary));
    }

    #[tokio::test]
    async fn test_run_tui_is_not_a_report() {
        let api = AdminApi::new(Arc::new(MockHttpClient::new()));
        let ctx = RequestContext::new("http://api.test");
        assert!(run_report_command(CliCommand::RunTui, &api, &ctx).await.is_none());
    }
}
