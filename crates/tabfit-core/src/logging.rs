#![forbid(unsafe_code)]

//! Logging support.
//!
//! With the `tracing` feature the calculator's log macros are the `tracing`
//! ones. Without it they expand to nothing, so the hot resize path carries no
//! logging cost in default builds.
//!
//! Only the levels the calculator emits at are provided: `trace` for every
//! split, `debug` for a missing container, `warn` for a width/item count
//! mismatch.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
