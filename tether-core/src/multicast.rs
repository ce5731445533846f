//! # Multicast Delegates
//!
//! A [`MulticastDelegate`] owns an ordered sequence of [`InvocationTarget`]s
//! and invokes them one after another on the calling thread.
//!
//! # Ordering
//!
//! Targets are kept in registration order and never reordered. Merging
//! another multicast copies its targets after the existing ones, so the
//! sequence stays flat no matter how it was composed. Registrations are not
//! deduplicated: a target pushed twice runs twice.
//!
//! # Failure
//!
//! Invocation has no fault isolation. A panicking handler unwinds out of
//! [`MulticastDelegate::apply`] and the remaining handlers never run. For
//! handlers returning `Result`, [`MulticastDelegate::try_apply`] stops at the
//! first `Err` and reports its index.
//!
//! # Arguments
//!
//! Every handler receives its own clone of the arguments, so multicast
//! invocation requires `Args: Clone`. Exclusive references such as `&mut T`
//! are not `Clone` and cannot be passed. Pass a `&RefCell<T>` instead and
//! borrow it mutably inside each handler:
//!
//! ```rust
//! use std::cell::RefCell;
//! use tether_core::MulticastDelegate;
//!
//! let append = |buffer: &RefCell<String>| buffer.borrow_mut().push('a');
//! let shout = |buffer: &RefCell<String>| buffer.borrow_mut().make_ascii_uppercase();
//!
//! let mut on_write = MulticastDelegate::<(&RefCell<String>,)>::new();
//! on_write.push_closure(&append);
//! on_write.push_closure(&shout);
//!
//! let buffer = RefCell::new(String::from("dat"));
//! on_write.invoke(&buffer);
//! assert_eq!(*buffer.borrow(), "DATA");
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use tether_core::{Delegate, MulticastDelegate};
//!
//! let log = RefCell::new(Vec::new());
//! let first = |value: i32| log.borrow_mut().push(value);
//! let second = |value: i32| log.borrow_mut().push(value * 10);
//!
//! let mut on_change = MulticastDelegate::<(i32,)>::new();
//! on_change.push_closure(&first);
//! on_change.push(Delegate::from_closure(&second));
//! on_change.invoke(4);
//!
//! assert_eq!(*log.borrow(), vec![4, 40]);
//! ```

use crate::{
    delegate::Delegate,
    error::HandlerError,
    signature::{Closure, for_each_arity},
    target::InvocationTarget,
};
use std::{fmt, ops::AddAssign};

/// An ordered, append-mostly collection of delegates invoked together.
///
/// A multicast is not `Clone`; build copies with [`MulticastDelegate::merge`].
pub struct MulticastDelegate<'a, Args, R = ()> {
    targets: Vec<InvocationTarget<'a, Args, R>>,
}

impl<'a, Args, R> MulticastDelegate<'a, Args, R> {
    /// Creates an empty multicast delegate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Creates an empty multicast delegate with room for `capacity` targets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            targets: Vec::with_capacity(capacity),
        }
    }

    /// Number of registered targets.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if no target is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns `true` if no target is registered. Same as
    /// [`MulticastDelegate::is_empty`].
    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_empty()
    }

    /// Appends the target of `delegate`. Null delegates are ignored.
    pub fn push(&mut self, delegate: Delegate<'a, Args, R>) {
        let Some(target) = delegate.target() else {
            return;
        };
        self.targets.push(target);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(len = self.targets.len(), "delegate appended");
        }
    }

    /// Binds `closure` by reference and appends it.
    pub fn push_closure<F>(&mut self, closure: &'a F)
    where
        F: Closure<Args, R>,
    {
        self.push(Delegate::from_closure(closure));
    }

    /// Appends copies of every target of `other`, in order.
    ///
    /// `other` is left untouched; both multicasts own their targets
    /// independently afterwards.
    pub fn merge(&mut self, other: &MulticastDelegate<'a, Args, R>) {
        self.targets.extend_from_slice(&other.targets);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                merged = other.targets.len(),
                len = self.targets.len(),
                "multicast merged"
            );
        }
    }

    /// Returns `true` if a target equal to `delegate`'s is registered.
    pub fn contains(&self, delegate: &Delegate<'_, Args, R>) -> bool {
        delegate
            .target()
            .is_some_and(|target| self.targets.iter().any(|t| *t == target))
    }

    /// Removes the most recent registration equal to `delegate`.
    ///
    /// The order of the remaining targets is preserved. Returns `false` if
    /// `delegate` is null or not registered.
    pub fn remove(&mut self, delegate: &Delegate<'_, Args, R>) -> bool {
        let Some(target) = delegate.target() else {
            return false;
        };
        let Some(index) = self.targets.iter().rposition(|t| *t == target) else {
            return false;
        };
        self.targets.remove(index);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(index, len = self.targets.len(), "delegate removed");
        }
        true
    }

    /// Removes every registered target.
    pub fn clear(&mut self) {
        self.targets.clear();

        #[cfg(feature = "tracing")]
        {
            tracing::trace!("multicast cleared");
        }
    }

    /// Iterates over the registered targets as delegates, in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Delegate<'a, Args, R>> + '_ {
        self.targets.iter().copied().map(Delegate::from_target)
    }

    /// Invokes every target in order, discarding return values.
    ///
    /// Each target receives its own clone of `args`. Invoking an empty
    /// multicast does nothing.
    pub fn apply(&self, args: Args)
    where
        Args: Clone,
    {
        for target in &self.targets {
            target.call(args.clone());
        }
    }

    /// Invokes every target in order, passing each return value to
    /// `observer` together with the target's index before moving on.
    pub fn apply_observed<F>(&self, args: Args, mut observer: F)
    where
        Args: Clone,
        F: FnMut(usize, &R),
    {
        for (index, target) in self.targets.iter().enumerate() {
            let value = target.call(args.clone());
            observer(index, &value);
        }
    }
}

impl<'a, Args, T, E> MulticastDelegate<'a, Args, Result<T, E>> {
    /// Invokes targets in order until one returns `Err`.
    ///
    /// The remaining targets are not invoked. `Ok` values are discarded.
    pub fn try_apply(&self, args: Args) -> Result<(), HandlerError<E>>
    where
        Args: Clone,
    {
        for (index, target) in self.targets.iter().enumerate() {
            if let Err(source) = target.call(args.clone()) {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(index, "handler failed, aborting invocation");
                }
                return Err(HandlerError { index, source });
            }
        }
        Ok(())
    }
}

macro_rules! impl_multicast_invoke {
    ($($A:ident $a:ident),*) => {
        impl<'a, R, $($A: Clone),*> MulticastDelegate<'a, ($($A,)*), R> {
            /// Invokes every target in order, discarding return values.
            pub fn invoke(&self, $($a: $A),*) {
                self.apply(($($a,)*))
            }

            /// Invokes every target in order, reporting each return value to
            /// `observer` as `(index, &value)`.
            pub fn invoke_observed<F>(&self, $($a: $A,)* observer: F)
            where
                F: FnMut(usize, &R),
            {
                self.apply_observed(($($a,)*), observer)
            }
        }

        impl<'a, T, E, $($A: Clone),*> MulticastDelegate<'a, ($($A,)*), Result<T, E>> {
            /// Invokes targets in order until one returns `Err`.
            pub fn try_invoke(&self, $($a: $A),*) -> Result<(), HandlerError<E>> {
                self.try_apply(($($a,)*))
            }
        }
    };
}

for_each_arity!(impl_multicast_invoke);

impl<Args, R> Default for MulticastDelegate<'_, Args, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'b, Args, R> PartialEq<MulticastDelegate<'b, Args, R>> for MulticastDelegate<'_, Args, R> {
    fn eq(&self, other: &MulticastDelegate<'b, Args, R>) -> bool {
        self.targets.len() == other.targets.len()
            && self
                .targets
                .iter()
                .zip(&other.targets)
                .all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<Args, R> Eq for MulticastDelegate<'_, Args, R> {}

impl<'b, Args, R> PartialEq<Delegate<'b, Args, R>> for MulticastDelegate<'_, Args, R> {
    fn eq(&self, other: &Delegate<'b, Args, R>) -> bool {
        match (self.targets.as_slice(), other.target()) {
            ([], None) => true,
            ([only], Some(target)) => *only == target,
            _ => false,
        }
    }
}

impl<'a, Args, R> AddAssign<Delegate<'a, Args, R>> for MulticastDelegate<'a, Args, R> {
    fn add_assign(&mut self, delegate: Delegate<'a, Args, R>) {
        self.push(delegate);
    }
}

impl<'a, Args, R> AddAssign<&MulticastDelegate<'a, Args, R>> for MulticastDelegate<'a, Args, R> {
    fn add_assign(&mut self, other: &MulticastDelegate<'a, Args, R>) {
        self.merge(other);
    }
}

impl<'a, Args, R> Extend<Delegate<'a, Args, R>> for MulticastDelegate<'a, Args, R> {
    fn extend<I: IntoIterator<Item = Delegate<'a, Args, R>>>(&mut self, iter: I) {
        for delegate in iter {
            self.push(delegate);
        }
    }
}

impl<'a, Args, R> FromIterator<Delegate<'a, Args, R>> for MulticastDelegate<'a, Args, R> {
    fn from_iter<I: IntoIterator<Item = Delegate<'a, Args, R>>>(iter: I) -> Self {
        let mut multicast = Self::new();
        multicast.extend(iter);
        multicast
    }
}

impl<Args, R> fmt::Debug for MulticastDelegate<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulticastDelegate")
            .field("targets", &self.targets)
            .finish()
    }
}
