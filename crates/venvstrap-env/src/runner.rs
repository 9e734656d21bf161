//! Blocking external command execution.
//!
//! Children inherit stdin/stdout/stderr, so `venv` and `pip` output reaches
//! the terminal unchanged.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use venvstrap_core::observability;

use crate::error::BootstrapError;

/// Quote one argument the way Python's `repr` quotes a string: single
/// quotes unless the text holds a `'` and no `"`.
fn repr(arg: &str) -> String {
    let quote = if arg.contains('\'') && !arg.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(arg.len() + 2);
    out.push(quote);
    for c in arg.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render a command as an argument tuple: `('python3', '-m', 'venv', '.venv')`.
pub fn describe(program: &OsStr, args: &[OsString]) -> String {
    let parts: Vec<String> = std::iter::once(program)
        .chain(args.iter().map(OsString::as_os_str))
        .map(|a| repr(&a.to_string_lossy()))
        .collect();
    if parts.len() == 1 {
        format!("({},)", parts[0])
    } else {
        format!("({})", parts.join(", "))
    }
}

/// Run `program args...` in `cwd` and wait for it.
///
/// A non-zero exit maps to [`BootstrapError::CommandFailed`]; a program
/// that cannot be started maps to [`BootstrapError::Spawn`].
pub fn call(program: &OsStr, args: &[OsString], cwd: &Path) -> Result<(), BootstrapError> {
    let command = describe(program, args);
    let program_str = program.to_string_lossy();
    let args_str: Vec<String> = args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    tracing::info!(command = %command, cwd = %cwd.display(), "Running");
    observability::audit_command_started(&program_str, &args_str, &cwd.to_string_lossy());

    let started = Instant::now();
    let result = Command::new(program).args(args).current_dir(cwd).status();
    let duration_ms = started.elapsed().as_millis() as u64;

    let status = match result {
        Ok(status) => status,
        Err(source) => {
            tracing::warn!(command = %command, error = %source, "Failed to start");
            observability::audit_command_completed(&program_str, None, duration_ms);
            return Err(BootstrapError::Spawn { command, source });
        }
    };

    observability::audit_command_completed(&program_str, status.code(), duration_ms);
    if !status.success() {
        tracing::warn!(command = %command, status = %status, "Command failed");
        return Err(BootstrapError::CommandFailed { command, status });
    }

    tracing::info!(command = %command, duration_ms, "Finished");
    Ok(())
}
