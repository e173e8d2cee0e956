//! Logging setup for the `md2tex` binary.
//!
//! The library only emits `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! The filter is chosen in this order:
//! 1. `verbose`: DEBUG for this crate
//! 2. `quiet`: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: INFO for this crate

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used by `--verbose`
pub const VERBOSE_FILTER: &str = "mdtex=debug,md2tex=debug";

/// Filter directive used by `--quiet`
pub const QUIET_FILTER: &str = "mdtex=error,md2tex=error";

/// Filter directive used when neither flag nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "mdtex=info,md2tex=info";

/// Build the filter for the given flags
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second init (e.g. from tests) is ignored
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
