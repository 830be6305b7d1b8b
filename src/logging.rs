use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::LOG_ENV_VAR;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr log subscriber
///
/// The filter is read from `DECISION_WHEEL_LOG`, e.g.
/// `DECISION_WHEEL_LOG=decision_wheel=debug`. Logs go to stderr so reports
/// on stdout stay parseable. Does nothing if a subscriber is already set.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
