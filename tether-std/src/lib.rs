//! # tether-std
//!
//! Standard implementations for the Tether callback library.
//!
//! This crate provides:
//! - **Observers**: [`Collector`](observers::Collector) and
//!   [`LoggingObserver`](observers::LoggingObserver) for
//!   `MulticastDelegate::apply_observed`
//! - **Testing**: [`CallLog`](testing::CallLog), [`Recorder`](testing::Recorder)
//!   and [`CountingHandler`](testing::CountingHandler)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use tether_core;

// Modules
pub mod observers;
pub mod testing;
