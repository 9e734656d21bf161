//! Observability: tracing init and the JSONL audit log.
//!
//! Uses config::ObservabilityConfig for VENVSTRAP_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

const QUIET_LEVEL: &str = "venvstrap=warn,venvstrap_env=warn";

/// Initialize tracing. Call once at process startup.
/// `RUST_LOG` wins over the configured level; with VENVSTRAP_QUIET=1 only WARN and above are logged.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        QUIET_LEVEL.to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    // Logs go to stderr so they never interleave with pip's stdout.
    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn audit_path() -> Option<&'static str> {
    let path = ObservabilityConfig::from_env().audit_log.as_deref()?;
    if let Some(parent) = Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    Some(path)
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn append_jsonl(path: &Path, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn command_started_record(program: &str, args: &[String], cwd: &str) -> serde_json::Value {
    json!({
        "ts": now(),
        "event": "command_started",
        "cmd": program,
        "args": args,
        "cwd": cwd,
    })
}

fn command_completed_record(
    program: &str,
    exit_code: Option<i32>,
    duration_ms: u64,
) -> serde_json::Value {
    json!({
        "ts": now(),
        "event": "command_completed",
        "cmd": program,
        "exit_code": exit_code,
        "duration_ms": duration_ms,
        "success": exit_code == Some(0),
    })
}

/// Audit: command_started (right before spawn)
pub fn audit_command_started(program: &str, args: &[String], cwd: &str) {
    if let Some(path) = audit_path() {
        append_jsonl(Path::new(path), &command_started_record(program, args, cwd));
    }
}

/// Audit: command_completed. `exit_code` is `None` when the child was
/// killed by a signal or never started.
pub fn audit_command_completed(program: &str, exit_code: Option<i32>, duration_ms: u64) {
    if let Some(path) = audit_path() {
        append_jsonl(
            Path::new(path),
            &command_completed_record(program, exit_code, duration_ms),
        );
    }
}
