//! Tracing subscriber setup.
//!
//! Hosts embedding the bridge may already own a global subscriber, so
//! installation is opt-in and never replaces an existing one.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::BridgeOptions;

/// Install a stderr subscriber. `RUST_LOG` wins over the configured level.
///
/// Returns `false` when a global subscriber was already set.
pub fn init(options: &BridgeOptions) -> bool {
    let level = options.log_level.as_str();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_ansi(options.log_ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}

/// [`init`] with options resolved from the environment.
pub fn init_from_env() {
    let options = BridgeOptions::from_env();
    if init(&options) {
        tracing::debug!(level = %options.log_level, "bridge logging initialized");
    }
}
