//! Testing utilities for Tether.
//!
//! This module provides receivers and logs that make it easy to check which
//! handlers ran, and in which order.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log that handlers append to
//! - [`Recorder`]: A receiver with shared-receiver methods for `from_method`
//! - [`CountingHandler`]: A receiver with an exclusive-receiver method for
//!   `from_method_mut`

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

// ============================================================================
// Call Log
// ============================================================================

/// A shared, single-threaded log of handler calls.
///
/// Clones share the same underlying log.
///
/// # Example
///
/// ```rust
/// use tether_std::testing::CallLog;
///
/// let log = CallLog::new();
/// let handle = log.clone();
/// handle.push(1);
/// handle.push(2);
/// assert_eq!(log.entries(), vec![1, 2]);
/// ```
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append an entry.
    pub fn push(&self, entry: T) {
        self.entries.borrow_mut().push(entry);
    }

    /// Borrow the recorded entries without cloning them.
    pub fn view(&self) -> Ref<'_, Vec<T>> {
        self.entries.borrow()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<T: Clone> CallLog<T> {
    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

// ============================================================================
// Recorder
// ============================================================================

/// A receiver that writes a fixed value to a [`CallLog`] when called.
///
/// # Example
///
/// ```rust
/// use tether_core::MulticastDelegate;
/// use tether_std::testing::{CallLog, Recorder};
///
/// let log = CallLog::new();
/// let first = Recorder::new(1, log.clone());
/// let second = Recorder::new(2, log.clone());
///
/// let mut multicast = MulticastDelegate::<()>::new();
/// multicast.push(first.delegate());
/// multicast.push(second.delegate());
/// multicast.invoke();
///
/// assert_eq!(log.entries(), vec![1, 2]);
/// ```
pub struct Recorder<T> {
    value: T,
    log: CallLog<T>,
}

impl<T: Clone> Recorder<T> {
    /// Create a recorder that writes `value` to `log`.
    pub fn new(value: T, log: CallLog<T>) -> Self {
        Self { value, log }
    }

    /// Writes the value to the log.
    pub fn record(&self) {
        self.log.push(self.value.clone());
    }

    /// Writes the value to the log and returns it.
    pub fn record_and_return(&self) -> T {
        self.record();
        self.value.clone()
    }

    /// Writes `entry` instead of the fixed value.
    pub fn record_arg(&self, entry: T) {
        self.log.push(entry);
    }

    /// A delegate bound to [`Recorder::record`] on this recorder.
    pub fn delegate(&self) -> tether_core::Delegate<'_, ()> {
        tether_core::Delegate::<(), ()>::from_method(self, Self::record)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A receiver that counts invocations through an exclusive borrow.
///
/// Bind [`CountingHandler::hit`] with `Delegate::from_method_mut` on a
/// `RefCell<CountingHandler>`.
#[derive(Debug, Default)]
pub struct CountingHandler {
    count: usize,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Increments the count and returns the new value.
    pub fn hit(&mut self) -> usize {
        self.count += 1;
        self.count
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reset the counter.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
