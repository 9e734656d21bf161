//! Unified configuration layer.
//!
//! Every environment read lives here; other crates go through the typed
//! configs instead of calling `std::env::var` directly.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `.env` lookup
//! - `schema`: `BootstrapConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, read_dotenv_from_dir};
pub use schema::{BootstrapConfig, ObservabilityConfig};
