//! Paths the bootstrap works with, resolved once at start-up.

use std::path::{Path, PathBuf};

use venvstrap_core::config::BootstrapConfig;

use crate::error::BootstrapError;

/// Dependency manifest, one specifier per line.
pub const REQUIREMENTS_FILE: &str = "requirements.pip";
/// Activation helper: `with_venv.sh <venv-name> <cmd...>`.
pub const WITH_VENV_SCRIPT: &str = "with_venv.sh";

/// Immutable description of where the environment lives and which files
/// drive it. All paths hang off `tests_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvLayout {
    tests_dir: PathBuf,
    venv_name: String,
    python: String,
}

impl VenvLayout {
    pub fn new(
        tests_dir: impl Into<PathBuf>,
        venv_name: impl Into<String>,
        python: impl Into<String>,
    ) -> Self {
        Self {
            tests_dir: tests_dir.into(),
            venv_name: venv_name.into(),
            python: python.into(),
        }
    }

    /// Resolve the layout from config. Without a `tests_dir` override the
    /// anchor is the directory holding the running executable. The anchor
    /// is canonicalized, so it must exist.
    pub fn from_config(cfg: &BootstrapConfig) -> Result<Self, BootstrapError> {
        let anchor = match cfg.tests_dir {
            Some(ref dir) => dir.clone(),
            None => exe_dir()?,
        };
        let tests_dir = anchor
            .canonicalize()
            .map_err(|source| BootstrapError::TestsDir {
                path: anchor.display().to_string(),
                source,
            })?;
        Ok(Self::new(tests_dir, cfg.venv_name.clone(), cfg.python.clone()))
    }

    pub fn tests_dir(&self) -> &Path {
        &self.tests_dir
    }

    /// Parent of the tests directory; both commands run here.
    pub fn project_root(&self) -> &Path {
        self.tests_dir.parent().unwrap_or(&self.tests_dir)
    }

    /// Environment name as passed to `venv` and the helper (relative).
    pub fn venv_name(&self) -> &str {
        &self.venv_name
    }

    /// Where the environment ends up on disk.
    pub fn venv_dir(&self) -> PathBuf {
        self.project_root().join(&self.venv_name)
    }

    pub fn requirements(&self) -> PathBuf {
        self.tests_dir.join(REQUIREMENTS_FILE)
    }

    pub fn with_venv(&self) -> PathBuf {
        self.tests_dir.join(WITH_VENV_SCRIPT)
    }

    pub fn python(&self) -> &str {
        &self.python
    }
}

fn exe_dir() -> Result<PathBuf, BootstrapError> {
    let exe = std::env::current_exe().map_err(|source| BootstrapError::TestsDir {
        path: "<current executable>".to_string(),
        source,
    })?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
