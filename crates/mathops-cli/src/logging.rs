//! Diagnostic logging for the CLI.
//!
//! Library code only emits `tracing` events; this module installs the
//! subscriber. `RUST_LOG` wins over the verbosity-derived default.
//!
//! ```bash
//! RUST_LOG=mathops=trace mathops calc 1 add 2
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Build the env filter for a verbosity level
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install a compact stderr subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
