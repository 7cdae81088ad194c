//! Runtime configuration.
//!
//! Precedence, highest first: CLI flag, environment, credentials file,
//! built-in default.
//!
//! ```ignore
//! let config = AppConfig::load(ConfigOverrides::default())?;
//! let ctx = config.request_context();
//! ```

mod credentials;

pub use credentials::{Credentials, CredentialsStore, STATE_DIR};

use std::time::Duration;

use crate::api::RequestContext;
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_API_URL: &str = "ENCYBARA_API_URL";
pub const ENV_ADMIN_TOKEN: &str = "ENCYBARA_ADMIN_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "ENCYBARA_TIMEOUT_SECS";

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Resolve from the process environment and the default credentials file.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let credentials = CredentialsStore::new()
            .map(|store| store.load())
            .unwrap_or_default();
        Self::resolve(overrides, |key| std::env::var(key).ok(), &credentials)
    }

    /// Resolve from explicit sources.
    pub fn resolve(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        credentials: &Credentials,
    ) -> Result<Self, ConfigError> {
        let base_url = overrides
            .base_url
            .or_else(|| env(ENV_API_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = validate_base_url(&base_url)?;

        let token = overrides
            .token
            .or_else(|| env(ENV_ADMIN_TOKEN))
            .or_else(|| credentials.admin_token.clone())
            .filter(|token| !token.trim().is_empty());

        let request_timeout = match env(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_TIMEOUT_SECS.to_string(),
                        value: raw,
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            token,
            request_timeout,
        })
    }

    /// The explicit context handed to every API call.
    pub fn request_context(&self) -> RequestContext {
        let ctx = RequestContext::new(self.base_url.clone());
        match &self.token {
            Some(token) => ctx.with_token(token.clone()),
            None => ctx,
        }
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            AppConfig::resolve(ConfigOverrides::default(), env_from(&[]), &Credentials::default())
                .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_precedence_flag_over_env_over_file() {
        let creds = Credentials {
            admin_token: Some("from-file".to_string()),
        };
        let env = env_from(&[
            (ENV_API_URL, "https://env.example.com/"),
            (ENV_ADMIN_TOKEN, "from-env"),
        ]);

        let config = AppConfig::resolve(ConfigOverrides::default(), &env, &creds).unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.token.as_deref(), Some("from-env"));

        let overrides = ConfigOverrides {
            base_url: Some("http://flag:9000".to_string()),
            token: Some("from-flag".to_string()),
        };
        let config = AppConfig::resolve(overrides, &env, &creds).unwrap();
        assert_eq!(config.base_url, "http://flag:9000");
        assert_eq!(config.token.as_deref(), Some("from-flag"));

        let config =
            AppConfig::resolve(ConfigOverrides::default(), env_from(&[]), &creds).unwrap();
        assert_eq!(config.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_invalid_base_url() {
        let overrides = ConfigOverrides {
            base_url: Some("  ".to_string()),
            token: None,
        };
        assert_eq!(
            AppConfig::resolve(overrides, env_from(&[]), &Credentials::default()),
            Err(ConfigError::EmptyBaseUrl)
        );

        let overrides = ConfigOverrides {
            base_url: Some("ftp://x".to_string()),
            token: None,
        };
        assert!(matches!(
            AppConfig::resolve(overrides, env_from(&[]), &Credentials::default()),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_timeout_from_env() {
        let config = AppConfig::resolve(
            ConfigOverrides::default(),
            env_from(&[(ENV_TIMEOUT_SECS, "30")]),
            &Credentials::default(),
        )
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        for bad in ["0", "soon"] {
            assert!(AppConfig::resolve(
                ConfigOverrides::default(),
                env_from(&[(ENV_TIMEOUT_SECS, bad)]),
                &Credentials::default(),
            )
            .is_err());
        }
    }

    #[test]
    fn test_request_context_carries_token() {
        let config = AppConfig {
            token: Some("t0k".to_string()),
            ..AppConfig::default()
        };
        let ctx = config.request_context();
        assert_eq!(ctx.base_url(), DEFAULT_BASE_URL);
        assert!(ctx.has_token());
    }

    #[test]
    #[serial]
    fn test_load_reads_process_env() {
        std::env::set_var(ENV_API_URL, "http://from-process-env:1234");
        let config = AppConfig::load(ConfigOverrides::default());
        std::env::remove_var(ENV_API_URL);

        assert_eq!(config.unwrap().base_url, "http://from-process-env:1234");
    }
}
