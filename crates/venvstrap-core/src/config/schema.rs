//! Typed configs grouped by concern, loaded from environment variables.

use super::env_keys::{bootstrap as boot_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};
use std::path::PathBuf;

pub const DEFAULT_VENV_NAME: &str = ".venv";
pub const DEFAULT_PYTHON: &str = "python3";
pub const DEFAULT_LOG_LEVEL: &str = "venvstrap=info,venvstrap_env=info";

/// Overrides for the bootstrap layout. Every field falls back to the
/// hard-coded default when its variable is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// `None` means "the directory holding the running executable".
    pub tests_dir: Option<PathBuf>,
    pub venv_name: String,
    pub python: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tests_dir: None,
            venv_name: DEFAULT_VENV_NAME.to_string(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Load from the process environment, falling back to `./.env`.
    pub fn from_env() -> Self {
        Self {
            tests_dir: env_optional(boot_keys::VENVSTRAP_TESTS_DIR).map(PathBuf::from),
            venv_name: env_or(boot_keys::VENVSTRAP_VENV_NAME, || {
                DEFAULT_VENV_NAME.to_string()
            }),
            python: env_or(boot_keys::VENVSTRAP_PYTHON, || DEFAULT_PYTHON.to_string()),
        }
    }
}

/// Observability config: quiet, log_level, log_json, audit_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(obv_keys::VENVSTRAP_QUIET, false),
            log_level: env_or(obv_keys::VENVSTRAP_LOG_LEVEL, || DEFAULT_LOG_LEVEL.to_string()),
            log_json: env_bool(obv_keys::VENVSTRAP_LOG_JSON, false),
            audit_log: env_optional(obv_keys::VENVSTRAP_AUDIT_LOG),
        })
    }
}
