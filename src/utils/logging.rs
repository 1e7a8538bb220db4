//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a console subscriber at `level`; `RUST_LOG` takes precedence.
///
/// Calling it again after a subscriber is installed leaves the first
/// filter in place.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .with(filter)
        .try_init()
        .ok();
}
