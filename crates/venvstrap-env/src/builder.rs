//! Build the test virtualenv and install requirements through the
//! activation helper.

use std::ffi::{OsStr, OsString};

use crate::error::BootstrapError;
use crate::layout::VenvLayout;
use crate::runner;

/// Runs the two bootstrap steps against a resolved [`VenvLayout`].
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    layout: VenvLayout,
}

impl Bootstrapper {
    pub fn new(layout: VenvLayout) -> Self {
        Self { layout }
    }

    /// `<python> -m venv <name>`, run from the project root.
    ///
    /// Always invoked, even if the directory exists; `venv` refreshes an
    /// existing environment in place.
    pub fn create_venv(&self) -> Result<(), BootstrapError> {
        let args: Vec<OsString> = vec![
            "-m".into(),
            "venv".into(),
            self.layout.venv_name().into(),
        ];
        runner::call(
            OsStr::new(self.layout.python()),
            &args,
            self.layout.project_root(),
        )
    }

    /// `<with_venv.sh> <name> pip install <args...>`, run from the project root.
    pub fn install<I, S>(&self, args: I) -> Result<(), BootstrapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut argv: Vec<OsString> = vec![
            self.layout.venv_name().into(),
            "pip".into(),
            "install".into(),
        ];
        argv.extend(args.into_iter().map(Into::into));
        runner::call(
            self.layout.with_venv().as_os_str(),
            &argv,
            self.layout.project_root(),
        )
    }

    /// Create the environment, then install `args` into it. The install is
    /// never attempted when environment creation fails.
    pub fn pip_install<I, S>(&self, args: I) -> Result<(), BootstrapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.create_venv()?;
        self.install(args)
    }

    /// Full bootstrap: `pip_install -r <tests>/requirements.pip`.
    pub fn install_requirements(&self) -> Result<(), BootstrapError> {
        let requirements = self.layout.requirements();
        tracing::info!(
            venv = %self.layout.venv_dir().display(),
            requirements = %requirements.display(),
            "Bootstrapping test environment"
        );
        self.pip_install([OsString::from("-r"), requirements.into_os_string()])
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::{Project, FAILING_PYTHON, FAKE_PYTHON};

    #[test]
    fn test_install_requirements_populates_venv() {
        let project = Project::new(FAKE_PYTHON, Some("pytest>=7\nmock\n"));
        Bootstrapper::new(project.layout.clone())
            .install_requirements()
            .unwrap();

        assert!(project.venv_file("bin").is_dir());
        let installed = std::fs::read_to_string(project.venv_file("installed")).unwrap();
        assert_eq!(installed, "pytest>=7\nmock\n");
    }

    #[test]
    fn test_venv_failure_skips_install() {
        let project = Project::new(FAILING_PYTHON, Some("pytest\n"));
        let err = Bootstrapper::new(project.layout.clone())
            .install_requirements()
            .unwrap_err();

        let command = err.command().unwrap();
        assert!(command.ends_with("'-m', 'venv', '.venv')"), "{command}");
        assert!(!project.venv_file("installed").exists());
    }

    #[test]
    fn test_missing_interpreter_skips_install() {
        let mut project = Project::new(FAKE_PYTHON, Some("pytest\n"));
        project.layout = VenvLayout::new(
            project.layout.tests_dir(),
            ".venv",
            "venvstrap-no-such-python",
        );
        let err = Bootstrapper::new(project.layout.clone())
            .install_requirements()
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Spawn { .. }));
        assert!(!project.layout.venv_dir().exists());
    }

    #[test]
    fn test_install_failure_leaves_venv_in_place() {
        let project = Project::new(FAKE_PYTHON, None);
        let err = Bootstrapper::new(project.layout.clone())
            .install_requirements()
            .unwrap_err();

        assert!(matches!(err, BootstrapError::CommandFailed { .. }));
        let command = err.command().unwrap();
        assert!(command.contains("'pip', 'install', '-r'"), "{command}");
        assert!(command.contains("requirements.pip"), "{command}");
        assert!(project.venv_file("bin").is_dir());
    }

    #[test]
    fn test_rerun_succeeds() {
        let project = Project::new(FAKE_PYTHON, Some("pytest\n"));
        let bootstrapper = Bootstrapper::new(project.layout.clone());
        bootstrapper.install_requirements().unwrap();
        bootstrapper.install_requirements().unwrap();

        let created = std::fs::read_to_string(project.venv_file("created")).unwrap();
        assert_eq!(created.lines().count(), 2);
    }

    #[test]
    fn test_pip_install_passes_extra_args() {
        let project = Project::new(FAKE_PYTHON, None);
        Bootstrapper::new(project.layout.clone())
            .pip_install(["--upgrade", "pip"])
            .unwrap();

        let installed = std::fs::read_to_string(project.venv_file("installed")).unwrap();
        assert_eq!(installed.trim(), "--upgrade pip");
    }
}
