//! CLI plumbing for the dependency scan.
//!
//! - [`args`]: splits the positional pull request number from the flags
//! - [`extract`]: connects to GitHub and extracts the dependency URLs
//! - [`output`]: writes the URLs to stdout

use std::io;

use tracing_subscriber::EnvFilter;

pub mod args;
pub mod extract;
pub mod output;

/// Log level used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a stderr subscriber so stdout carries only dependency URLs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
