//! Tracing bootstrap for binaries and tests that want to see rcb's logs

use rcb_core::{DEFAULT_LOG_FILTER, RCB_LOG_VAR};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber writing compact lines to stderr.
///
/// The filter comes from the `RCB_LOG` environment variable and falls back
/// to `warn`. Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter()?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_from_env(RCB_LOG_VAR).or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
}
