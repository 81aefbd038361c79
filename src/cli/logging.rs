//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `JSON2SQL_LOG=json2sql=trace`
pub const LOG_ENV: &str = "JSON2SQL_LOG";

/// Install the stderr logger.
///
/// `JSON2SQL_LOG` wins when set and valid. Otherwise only warnings are shown,
/// or everything down to debug with `verbose`. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "json2sql=debug"
        } else {
            "json2sql=warn"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
