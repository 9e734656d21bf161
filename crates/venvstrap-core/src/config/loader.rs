//! Environment variable loading.
//!
//! Lookups check the process environment first, then `./.env`. Values from
//! `.env` stay in a private map and are never exported, so `venv` and `pip`
//! run with the caller's environment untouched.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::OnceLock;

/// `./.env` of the current directory, parsed on first use.
fn dotenv() -> &'static HashMap<String, String> {
    static DOTENV: OnceLock<HashMap<String, String>> = OnceLock::new();
    DOTENV.get_or_init(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        read_dotenv_from_dir(&dir)
    })
}

/// Parse `<dir>/.env` into a map. A missing or unreadable file yields an
/// empty map.
pub fn read_dotenv_from_dir(dir: &Path) -> HashMap<String, String> {
    std::fs::read_to_string(dir.join(".env"))
        .map(|content| parse_dotenv(&content).into_iter().collect())
        .unwrap_or_default()
}

/// Parse `KEY=value` lines. Blank lines and `#` comments are skipped,
/// surrounding quotes are stripped, and an unquoted trailing `# ...` is
/// treated as a comment.
pub(crate) fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().trim_start_matches("export ").trim();
        let mut value = value.trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Process environment wins over `.env`; blank values count as unset.
fn resolve(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    let raw = match env::var(key) {
        Ok(v) => v,
        Err(_) => dotenv.get(key)?.clone(),
    };
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_bool(s: &str) -> bool {
    !matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off")
}

/// Value of `key`, if set to something non-blank.
pub fn env_optional(key: &str) -> Option<String> {
    resolve(key, dotenv())
}

/// Value of `key`, or `default()` when unset.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(key).unwrap_or_else(default)
}

/// `0`/`false`/`no`/`off` are false, any other value is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    env_optional(key).map_or(default, |s| parse_bool(&s))
}
