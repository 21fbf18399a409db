use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "test";
pub const SELECTED_DATABASE: &str = "myApplicationDb";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_APP_NAME: &str = "dbprobe";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the probe.
///
/// The connection string carries credentials, so it is supplied through the
/// environment (or a `.env` file) and never through source.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub uri: String,
    pub default_database: String,
    pub selected_database: String,
    pub timeout: Duration,
    pub ping: bool,
    pub app_name: String,
}

// Hand-written so the URI never ends up in logs.
impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("uri", &"<redacted>")
            .field("default_database", &self.default_database)
            .field("selected_database", &self.selected_database)
            .field("timeout", &self.timeout)
            .field("ping", &self.ping)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let uri = get("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?;
        let default_database =
            get("MONGODB_DEFAULT_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let selected_database =
            get("MONGODB_DATABASE").unwrap_or_else(|| SELECTED_DATABASE.to_string());
        let app_name = get("MONGODB_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let timeout = match get("MONGODB_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "MONGODB_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let ping = match get("MONGODB_PING") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "MONGODB_PING",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            uri,
            default_database,
            selected_database,
            timeout,
            ping,
            app_name,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
