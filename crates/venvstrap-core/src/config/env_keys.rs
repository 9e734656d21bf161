//! Environment variable keys. All use the `VENVSTRAP_*` prefix and may
//! also be set in `./.env`.

/// Layout of the environment being bootstrapped
pub mod bootstrap {
    /// Anchor directory; holds `requirements.pip` and `with_venv.sh`.
    pub const VENVSTRAP_TESTS_DIR: &str = "VENVSTRAP_TESTS_DIR";
    pub const VENVSTRAP_VENV_NAME: &str = "VENVSTRAP_VENV_NAME";
    pub const VENVSTRAP_PYTHON: &str = "VENVSTRAP_PYTHON";
}

/// Observability and logging
pub mod observability {
    pub const VENVSTRAP_QUIET: &str = "VENVSTRAP_QUIET";
    pub const VENVSTRAP_LOG_LEVEL: &str = "VENVSTRAP_LOG_LEVEL";
    pub const VENVSTRAP_LOG_JSON: &str = "VENVSTRAP_LOG_JSON";
    pub const VENVSTRAP_AUDIT_LOG: &str = "VENVSTRAP_AUDIT_LOG";
}
