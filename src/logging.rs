// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "PULSE_VIEWER_LOG";

/// Filter used when [`ENV_LOG_FILTER`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the filter from `directives`, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a stderr fmt subscriber filtered by `PULSE_VIEWER_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let directives = std::env::var(ENV_LOG_FILTER).ok();
    let filter = build_filter(directives.as_deref());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
