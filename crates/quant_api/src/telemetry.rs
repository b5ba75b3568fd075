//! Tracing subscriber setup for hosts embedding the engine.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::LogLevel;

/// Installs a global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `level`.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing(level: LogLevel) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str())))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
