//! Logging setup.
//!
//! Everything goes through `tracing`. Output is written to stderr so that
//! stdout only carries what the CLI prints for the user. `RUST_LOG` wins over
//! the defaults picked here.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool, serving: bool) -> &'static str {
    match (verbose, serving) {
        (true, _) => "info,defn=debug",
        (false, true) => "info",
        (false, false) => "warn",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
