//! `tracing` subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to
//! `~/.encybara/logs/admin.log`. CLI commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::STATE_DIR;

/// Checked before `RUST_LOG`.
pub const ENV_LOG: &str = "ENCYBARA_LOG";

const DEFAULT_DIRECTIVE: &str = "encybara_admin=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// `~/.encybara/logs/admin.log`, or `None` without a home directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STATE_DIR).join("logs").join("admin.log"))
}

/// Filter directives from `ENCYBARA_LOG`, then `RUST_LOG`, then the default.
pub fn filter_directives(env: impl Fn(&str) -> Option<String>) -> String {
    env(ENV_LOG)
        .or_else(|| env("RUST_LOG"))
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install the global subscriber. Returns `false` when logging stays off
/// (log file not writable, or a subscriber was already installed).
pub fn init(target: LogTarget) -> bool {
    let directives = filter_directives(|key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if fs::create_dir_all(parent).is_err() {
                    return false;
                }
            }
            let file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => file,
                Err(_) => return false,
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .is_ok()
        }
    }
}
