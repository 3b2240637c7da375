//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Decide where the task database and log files live.
//! - Pick the log level for the current build and environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; unusable values fall back to defaults.

use crate::logging::{default_log_level, normalize_level};
use log::warn;
use std::path::PathBuf;

/// Overrides the database file path.
pub const ENV_DB_PATH: &str = "DAYPILOT_DB_PATH";
/// Overrides the log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "DAYPILOT_LOG_LEVEL";
/// Enables file logging into this absolute directory.
pub const ENV_LOG_DIR: &str = "DAYPILOT_LOG_DIR";

const APP_DIR_NAME: &str = "daypilot";
const DB_FILE_NAME: &str = "daypilot.sqlite3";

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// `None` leaves file logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Resolves settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let log_level = match read(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).unwrap_or_else(|err| {
                warn!("event=config_resolve module=config status=fallback key={ENV_LOG_LEVEL} error={err}");
                default_log_level()
            }),
            None => default_log_level(),
        };

        let log_dir = read(ENV_LOG_DIR).map(PathBuf::from);

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }

    /// Replaces the database path, e.g. from a CLI flag.
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

/// Default database location under the platform data directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(DB_FILE_NAME)
}

/// Default log directory next to the default database.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}
