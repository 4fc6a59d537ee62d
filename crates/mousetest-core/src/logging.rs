#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! With the `tracing` feature enabled, these re-export the `tracing` macros
//! so call sites emit real spans/events. Without it, they compile to
//! nothing, keeping the default build dependency-free.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
