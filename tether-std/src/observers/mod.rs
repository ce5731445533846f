//! Standard observers for `MulticastDelegate::apply_observed`.
//!
//! An observer is any `FnMut(usize, &R)`. The types here hand one out through
//! their `observer()` method, which borrows the observer for the duration of
//! the invocation.

pub mod collect;
pub mod logging;

pub use collect::Collector;
pub use logging::LoggingObserver;
