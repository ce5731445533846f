//! Error types for Tether.
//!
//! Binding never fails, so the hierarchy is small and built with `thiserror`:
//!
//! - [`DelegateError`] - Checked invocation of a delegate that is not bound
//! - [`HandlerError`] - A handler in a fallible multicast returned an error

use thiserror::Error;

/// A boxed error type for handlers that fail with heterogeneous errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when invoking a single delegate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateError {
    /// The delegate is not bound to any function, method or closure.
    #[error("delegate is not bound to a target")]
    Null,
}

/// A handler of a multicast delegate failed, aborting the remaining handlers.
///
/// Returned by `MulticastDelegate::try_apply` and `try_invoke`.
#[derive(Error, Debug)]
#[error("handler {index} failed")]
pub struct HandlerError<E> {
    /// Registration index of the failing handler.
    pub index: usize,
    /// The error the handler returned.
    #[source]
    pub source: E,
}

impl<E> HandlerError<E> {
    /// Discards the index, returning the handler's own error.
    pub fn into_source(self) -> E {
        self.source
    }
}
