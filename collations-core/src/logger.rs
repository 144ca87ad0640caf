//! Logging for registry construction and lookups.
//!
//! Comparisons and weight strings are never logged.

use log::LevelFilter;

/// Target used for every event emitted by the registry.
pub const REGISTRY_TARGET: &str = "collations::registry";

// `tracing` has no dynamic levels (https://github.com/tokio-rs/tracing/issues/372),
// so the level chosen in `LogSettings` is matched onto the static ones here.
macro_rules! registry_event {
    ($filter:expr, $($args:tt)*) => {{
        use ::tracing::Level;

        match $crate::logger::level_filter_to_trace_level($filter) {
            Some(Level::ERROR) => ::tracing::event!(target: $crate::logger::REGISTRY_TARGET, Level::ERROR, $($args)*),
            Some(Level::WARN) => ::tracing::event!(target: $crate::logger::REGISTRY_TARGET, Level::WARN, $($args)*),
            Some(Level::INFO) => ::tracing::event!(target: $crate::logger::REGISTRY_TARGET, Level::INFO, $($args)*),
            Some(Level::DEBUG) => ::tracing::event!(target: $crate::logger::REGISTRY_TARGET, Level::DEBUG, $($args)*),
            Some(Level::TRACE) => ::tracing::event!(target: $crate::logger::REGISTRY_TARGET, Level::TRACE, $($args)*),
            None => {}
        }
    }};
}

/// Maps a `log` filter onto the `tracing` level events are emitted at.
///
/// Returns `None` for [`LevelFilter::Off`].
pub fn level_filter_to_trace_level(filter: LevelFilter) -> Option<tracing::Level> {
    match filter {
        LevelFilter::Error => Some(tracing::Level::ERROR),
        LevelFilter::Warn => Some(tracing::Level::WARN),
        LevelFilter::Info => Some(tracing::Level::INFO),
        LevelFilter::Debug => Some(tracing::Level::DEBUG),
        LevelFilter::Trace => Some(tracing::Level::TRACE),
        LevelFilter::Off => None,
    }
}
