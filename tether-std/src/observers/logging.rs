//! Logging Observer - Observability for multicast invocation.

use std::fmt::Debug;

/// An observer that logs every handler result.
///
/// Uses the `tracing` crate when the `tracing` feature is enabled and does
/// nothing otherwise.
///
/// # Example
///
/// ```rust
/// use tether_core::MulticastDelegate;
/// use tether_std::observers::LoggingObserver;
///
/// let ready = || true;
/// let mut on_ready = MulticastDelegate::<(), bool>::new();
/// on_ready.push_closure(&ready);
///
/// let logging = LoggingObserver::named("on_ready");
/// on_ready.invoke_observed(logging.observer::<bool>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingObserver {
    name: &'static str,
}

impl LoggingObserver {
    /// Create a new `LoggingObserver` with a default name.
    pub fn new() -> Self {
        Self { name: "delegate" }
    }

    /// Create a new `LoggingObserver` with a custom name.
    ///
    /// The name is used in log messages to identify the multicast.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Logs one handler result.
    pub fn observe<R: Debug>(&self, index: usize, value: &R) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(delegate = %self.name, index, value = ?value, "handler returned");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, index, value);
        }
    }

    /// An observer closure that forwards to [`LoggingObserver::observe`].
    pub fn observer<R: Debug>(&self) -> impl FnMut(usize, &R) + '_ {
        move |index: usize, value: &R| self.observe(index, value)
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}
