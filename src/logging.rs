//! Diagnostics on stderr. Answers go to stdout; everything else goes here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. Filtering comes from `RUST_LOG` and
/// defaults to `warn`, e.g. `RUST_LOG=advent2024=debug advent2024 11 input.txt`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
