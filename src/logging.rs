//! Tracing subscriber setup for the binary

use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber
///
/// `RUST_LOG` wins when set, otherwise `default_level` applies to this crate only.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("wordle_engine={default_level},wordle={default_level}"))
    });

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    trace!("tracing initialized");
}
