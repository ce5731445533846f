//! # tether - Allocation-Free Delegates
//!
//! `tether` provides a type-erased, copyable callback handle ([`Delegate`])
//! that binds free functions, methods and closures without allocating, plus
//! an ordered aggregate ([`MulticastDelegate`]) for event-style fan-out.
//!
//! Delegates borrow what they bind. The borrow checker, not caller
//! discipline, keeps every receiver alive for as long as a delegate can reach
//! it. Equality is identity, so a registered handler can be found and removed
//! again with a delegate bound to the same target.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use tether::prelude::*;
//!
//! struct Window {
//!     width: u32,
//! }
//!
//! impl Window {
//!     fn resize(&mut self, width: u32) {
//!         self.width = width;
//!     }
//! }
//!
//! let window = RefCell::new(Window { width: 640 });
//! let widths = RefCell::new(Vec::new());
//! let record = |width: u32| widths.borrow_mut().push(width);
//!
//! let mut on_resize = MulticastDelegate::<(u32,)>::new();
//! on_resize.push(Delegate::<(u32,)>::from_method_mut(&window, Window::resize));
//! on_resize.push_closure(&record);
//! on_resize.invoke(800);
//!
//! assert_eq!(window.borrow().width, 800);
//! assert_eq!(*widths.borrow(), vec![800]);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Delegates
pub use tether_core::{Delegate, MulticastDelegate};

// Errors
pub use tether_core::{BoxError, DelegateError, HandlerError};

// Signatures
pub use tether_core::{Closure, InvocationTarget, Signature};

/// Standard observers.
pub mod observers {
    pub use tether_std::observers::{Collector, LoggingObserver};
}

/// Testing utilities.
pub mod testing {
    pub use tether_std::testing::{CallLog, CountingHandler, Recorder};
}

/// Prelude module - common imports for Tether.
///
/// # Usage
///
/// ```rust
/// use tether::prelude::*;
///
/// let doubled = |value: i32| value * 2;
/// let mut on_value = MulticastDelegate::<(i32,), i32>::new();
/// on_value.push(Delegate::from_closure(&doubled));
///
/// let mut collector = Collector::<i32>::new();
/// on_value.invoke_observed(21, collector.observer());
/// assert_eq!(collector.entries(), &[(0, 42)]);
///
/// let unbound = Delegate::<(i32,), i32>::null();
/// assert_eq!(unbound.try_invoke(1), Err(DelegateError::Null));
/// ```
pub mod prelude {
    // Delegates
    pub use crate::{Delegate, MulticastDelegate};

    // Errors
    pub use crate::{BoxError, DelegateError, HandlerError};

    // Observers
    pub use crate::observers::{Collector, LoggingObserver};
}
