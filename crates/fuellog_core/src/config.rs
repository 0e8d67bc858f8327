//! Runtime configuration resolved from the environment.
//!
//! - `FUELLOG_DB_PATH`: local store file, default `<tmp>/fuellog.sqlite3`.
//! - `FUELLOG_SYNC_URL`: sync backend endpoint; unset disables sync.
//! - `FUELLOG_SYNC_TIMEOUT_MS`: probe timeout, default `3000`.
//! - `FUELLOG_LOG_LEVEL`: `trace|debug|info|warn|error`, default per build mode.
//! - `FUELLOG_LOG_DIR`: absolute log directory; unset disables file logging.

use crate::logging::default_log_level;
use log::warn;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DB_PATH: &str = "FUELLOG_DB_PATH";
pub const ENV_SYNC_URL: &str = "FUELLOG_SYNC_URL";
pub const ENV_SYNC_TIMEOUT_MS: &str = "FUELLOG_SYNC_TIMEOUT_MS";
pub const ENV_LOG_LEVEL: &str = "FUELLOG_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FUELLOG_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "fuellog.sqlite3";
const DEFAULT_SYNC_TIMEOUT_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub sync_url: Option<String>,
    pub sync_timeout: Duration,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            sync_url: None,
            sync_timeout: Duration::from_millis(DEFAULT_SYNC_TIMEOUT_MS),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let sync_timeout = match read(ENV_SYNC_TIMEOUT_MS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!(
                        "event=config_load module=config status=fallback key={ENV_SYNC_TIMEOUT_MS}"
                    );
                    defaults.sync_timeout
                }
            },
            None => defaults.sync_timeout,
        };

        Self {
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            sync_url: read(ENV_SYNC_URL),
            sync_timeout,
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR),
        }
    }
}
