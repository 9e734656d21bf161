use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors returned while bootstrapping the environment.
///
/// `command` is the rendered argument tuple of the failing call, e.g.
/// `('python3', '-m', 'venv', '.venv')`.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Error running {command}. ({status})")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Error running {command}.")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot locate tests directory {path}")]
    TestsDir {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl BootstrapError {
    /// Rendered arguments of the failed command, if a command failed.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { command, .. } | Self::Spawn { command, .. } => Some(command),
            Self::TestsDir { .. } => None,
        }
    }
}
