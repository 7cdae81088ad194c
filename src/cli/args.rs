//! Command-line argument parsing.
//!
//! Hand-parsed: one optional command flag plus the configuration overrides.

use crate::config::ConfigOverrides;
use crate::error::ConfigError;
use crate::models::ResultTarget;

pub const USAGE: &str = "\
Usage: encybara-admin [OPTIONS]

Options:
  --summary               Print the dashboard counters and exit
  --results [USER_ID]     Print learning results (all users when omitted) and exit
  --base-url <URL>        Backend base URL (env: ENCYBARA_API_URL)
  --token <TOKEN>         Admin bearer token (env: ENCYBARA_ADMIN_TOKEN)
  -V, --version           Print version and exit
  -h, --help              Print this help and exit

Without a command flag the interactive console starts.";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Print the dashboard counters
    Summary,
    /// Print combined learning results for a target
    Results(ResultTarget),
    /// Run the TUI application (default)
    RunTui,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub overrides: ConfigOverrides,
}

/// Parse `std::env::args()`-style arguments (program name first).
///
/// ```
/// use encybara_admin::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["encybara-admin".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut overrides = ConfigOverrides::default();
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(with(CliCommand::Version, overrides)),
            "--help" | "-h" => return Ok(with(CliCommand::Help, overrides)),
            "--summary" => command = CliCommand::Summary,
            "--results" => {
                let target = match args.next_if(|next| !next.starts_with("--")) {
                    Some(raw) => {
                        let id: i64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                            key: "--results".to_string(),
                            value: raw.clone(),
                        })?;
                        ResultTarget::from_user_id(id)
                    }
                    None => ResultTarget::AllUsers,
                };
                command = CliCommand::Results(target);
            }
            "--base-url" => overrides.base_url = Some(flag_value(&mut args, "--base-url")?),
            "--token" => overrides.token = Some(flag_value(&mut args, "--token")?),
            _ => {}
        }
    }

    Ok(with(command, overrides))
}

fn with(command: CliCommand, overrides: ConfigOverrides) -> CliArgs {
    CliArgs { command, overrides }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingFlagValue(flag.to_string()))
}
