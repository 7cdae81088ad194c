//! Version and help output.

use super::args::USAGE;

/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("encybara-admin {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}

pub fn handle_help_command() {
    println!("{}\n\n{}", version_line(), USAGE);
}
