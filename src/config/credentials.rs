//! Stored admin token.
//!
//! The web console keeps its `admin_token` in browser storage; the terminal
//! console keeps it in `~/.encybara/.credentials.json`.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding console state.
pub const STATE_DIR: &str = ".encybara";

const CREDENTIALS_FILE: &str = ".credentials.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer token presented to the admin API.
    #[serde(default)]
    pub admin_token: Option<String>,
}

impl Credentials {
    pub fn has_token(&self) -> bool {
        self.admin_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

/// Loads and saves [`Credentials`] at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialsStore {
    path: PathBuf,
}

impl CredentialsStore {
    /// Store at the default location. `None` if there is no home directory.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::at(home.join(STATE_DIR).join(CREDENTIALS_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files load as empty credentials.
    pub fn load(&self) -> Credentials {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Credentials::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(creds) => creds,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed credentials file");
                Credentials::default()
            }
        }
    }

    /// Write credentials, creating the parent directory if needed.
    pub fn save(&self, credentials: &Credentials) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, credentials)?;
        writer.flush()
    }
}
