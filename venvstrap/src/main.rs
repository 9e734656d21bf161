//! `venvstrap`: create the test virtualenv and install its requirements.
//!
//! Takes no arguments; anything on the command line is ignored. Layout
//! overrides come from `VENVSTRAP_*` environment variables (or `.env`).
//!
//! Without `VENVSTRAP_TESTS_DIR`, `requirements.pip` and `with_venv.sh` are
//! looked up next to the executable, and the venv goes one level above it.
//! A plain `cargo run` therefore looks in `target/debug/`; point
//! `VENVSTRAP_TESTS_DIR` at the project's tests directory instead.

use anyhow::{Context, Result};
use venvstrap_core::config::BootstrapConfig;
use venvstrap_core::observability;
use venvstrap_env::{Bootstrapper, VenvLayout};

fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = BootstrapConfig::from_env();
    let layout = VenvLayout::from_config(&cfg).context("Resolve bootstrap layout")?;
    tracing::debug!(?layout, "Resolved layout");

    Bootstrapper::new(layout).install_requirements()?;
    Ok(())
}
