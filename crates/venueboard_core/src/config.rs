//! Process configuration resolved from the environment.
//!
//! # Responsibility
//! - Locate the board database file.
//! - Pick the log level and optional log directory.
//!
//! # Invariants
//! - Blank variables are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Database file path override.
pub const ENV_DB_PATH: &str = "VENUEBOARD_DB_PATH";
/// Log level override (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "VENUEBOARD_LOG_LEVEL";
/// Absolute directory for rolling log files; logging is off when unset.
pub const ENV_LOG_DIR: &str = "VENUEBOARD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "venueboard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl BoardConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: var(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            log_level: var(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: var(ENV_LOG_DIR),
        }
    }
}

/// `<temp_dir>/venueboard.sqlite3`.
pub fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}
