//! Runtime configuration defaults and environment overrides.
//!
//! # Responsibility
//! - Resolve the history store location and query limit.
//! - Resolve the default log directory.
//!
//! # Invariants
//! - Limits are always within `1..=MAX_LIMIT`.
//! - Invalid environment values fall back to defaults; they never fail.

use log::warn;
use std::path::PathBuf;

/// Environment variable overriding the number of records offered.
pub const LIMIT_ENV_VAR: &str = "MP_LIMIT";
pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 10_000;

const ALFRED_DB_RELATIVE_PATH: &str =
    "Library/Application Support/Alfred/Databases/clipboard.alfdb";
const APP_DIR_NAME: &str = "multiclip";

/// Picker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub db_path: PathBuf,
    pub limit: u32,
}

impl PickerConfig {
    /// Builds config from defaults and `MP_LIMIT`.
    pub fn from_env() -> Self {
        let limit = std::env::var(LIMIT_ENV_VAR).ok();
        Self {
            db_path: default_db_path(),
            limit: limit_from_env_value(limit.as_deref()),
        }
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Overrides the limit, clamped into the valid range.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = normalize_limit(Some(limit));
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Default Alfred clipboard database location under the home directory.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(ALFRED_DB_RELATIVE_PATH)
}

/// Default directory for rolling log files.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}

/// Normalizes a requested limit.
///
/// - `None` or `0` -> `DEFAULT_LIMIT`
/// - larger than `MAX_LIMIT` -> `MAX_LIMIT`
pub fn normalize_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => DEFAULT_LIMIT,
        Some(value) => value.min(MAX_LIMIT),
    }
}

fn limit_from_env_value(value: Option<&str>) -> u32 {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return DEFAULT_LIMIT;
    };
    match raw.parse::<u32>() {
        Ok(0) => {
            warn!("event=config_load module=config status=fallback key={LIMIT_ENV_VAR} error=zero_limit");
            DEFAULT_LIMIT
        }
        Ok(limit) => normalize_limit(Some(limit)),
        Err(err) => {
            warn!("event=config_load module=config status=fallback key={LIMIT_ENV_VAR} error={err}");
            DEFAULT_LIMIT
        }
    }
}
