//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for `--json` reports.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Safe to call once per process; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let default = if verbose {
        "websphere_acceptance=debug,warn"
    } else {
        "websphere_acceptance=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
