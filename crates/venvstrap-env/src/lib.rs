//! Bootstrap the test virtualenv: `python3 -m venv .venv`, then
//! `with_venv.sh .venv pip install -r requirements.pip`.
//!
//! Callers resolve a [`VenvLayout`] once and hand it to [`Bootstrapper`];
//! the first failing command aborts the whole run.

pub mod builder;
pub mod error;
pub mod layout;
pub mod runner;

pub use builder::Bootstrapper;
pub use error::BootstrapError;
pub use layout::VenvLayout;

#[cfg(all(test, unix))]
pub(crate) mod test_support;
