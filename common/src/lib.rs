//! Shared models and helpers used by every `recordr` crate.
//!
//! * [`record`]: the person record and its value types.
//! * [`error`]: validation failures.
//! * [`config`]: runtime settings assembled by the CLI.

pub mod config;
pub mod error;
pub mod record;

#[doc(hidden)]
pub use tracing;

/// Logs a neutral status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "recordr::status", $($arg)*)
    };
}

/// Logs a positive outcome, rendered with the `[+]` marker.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "recordr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
