//! # Single Delegates
//!
//! A [`Delegate`] holds at most one [`InvocationTarget`]. It is the handle
//! callers build, copy around and compare: binding never allocates, copying
//! is a field copy, and equality is the identity of the bound target.
//!
//! # Binding Kinds
//!
//! | constructor                   | receiver                | call shape                |
//! |-------------------------------|-------------------------|---------------------------|
//! | [`Delegate::from_fn`]         | none                    | `fn(A...) -> R`           |
//! | [`Delegate::from_method`]     | `&'a O`                 | `fn(&O, A...) -> R`       |
//! | [`Delegate::from_method_mut`] | `&'a RefCell<O>`        | `fn(&mut O, A...) -> R`   |
//! | [`Delegate::from_closure`]    | `&'a F`                 | `F: Fn(A...) -> R`        |
//!
//! Receivers are borrowed, not owned. The `'a` lifetime keeps them alive for
//! as long as any copy of the delegate exists.
//!
//! # Example
//!
//! ```rust
//! use tether_core::Delegate;
//!
//! fn square(value: i32) -> i32 {
//!     value * value
//! }
//!
//! let delegate = Delegate::<(i32,), i32>::from_fn(square);
//! assert_eq!(delegate.invoke(7), 49);
//! assert_eq!(delegate, Delegate::<(i32,), i32>::from_fn(square));
//! ```

use crate::{
    error::DelegateError,
    multicast::MulticastDelegate,
    signature::{Closure, Signature, for_each_arity},
    target::InvocationTarget,
};
use std::{cell::RefCell, fmt};

/// A type-erased, non-owning handle to one callable.
///
/// `Args` is the argument tuple and `R` the return type shared by every
/// target this delegate can bind. The default state is null.
pub struct Delegate<'a, Args, R = ()> {
    target: Option<InvocationTarget<'a, Args, R>>,
}

impl<'a, Args, R> Delegate<'a, Args, R> {
    /// Creates a null delegate.
    #[inline]
    pub const fn null() -> Self {
        Self { target: None }
    }

    /// Creates a null delegate. Same as [`Delegate::null`].
    #[inline]
    pub const fn new() -> Self {
        Self::null()
    }

    /// Binds a closure (or any `Fn` object) by reference.
    ///
    /// # Identity
    ///
    /// The binding is identified by the closure's address and its dispatch
    /// function. Zero-sized closures may share an address, and identical
    /// dispatch functions may be merged by the optimizer, so two distinct
    /// capture-less closures can compare equal. [`MulticastDelegate::remove`]
    /// and [`MulticastDelegate::contains`] may then match either registration.
    ///
    /// [`MulticastDelegate::remove`]: crate::MulticastDelegate::remove
    /// [`MulticastDelegate::contains`]: crate::MulticastDelegate::contains
    pub fn from_closure<F>(closure: &'a F) -> Self
    where
        F: Closure<Args, R>,
    {
        Self::from_target(InvocationTarget::closure(closure))
    }

    #[inline]
    pub(crate) fn from_target(target: InvocationTarget<'a, Args, R>) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Returns `true` if no target is bound.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// The bound target, if any.
    #[inline]
    pub fn target(&self) -> Option<InvocationTarget<'a, Args, R>> {
        self.target
    }

    /// Unbinds the delegate, returning it to the null state.
    #[inline]
    pub fn reset(&mut self) {
        self.target = None;
    }

    /// Invokes the bound target with an argument tuple.
    ///
    /// # Panics
    ///
    /// Panics if the delegate is null. Use [`Delegate::try_apply`] or check
    /// [`Delegate::is_null`] first.
    #[inline]
    #[track_caller]
    pub fn apply(&self, args: Args) -> R {
        match &self.target {
            Some(target) => target.call(args),
            None => null_invocation(),
        }
    }

    /// Invokes the bound target, or returns [`DelegateError::Null`].
    #[inline]
    pub fn try_apply(&self, args: Args) -> Result<R, DelegateError> {
        self.target
            .as_ref()
            .map(|target| target.call(args))
            .ok_or(DelegateError::Null)
    }
}

impl<'a, Args, R> Delegate<'a, Args, R>
where
    Args: Signature<R>,
{
    /// Binds a free function. The receiver is null.
    pub fn from_fn(function: Args::Function) -> Self {
        Self::from_target(InvocationTarget::function(function))
    }

    /// Binds a method taking a shared receiver.
    ///
    /// # Identity
    ///
    /// The binding is identified by the receiver's address and the method.
    /// Distinct zero-sized receivers may share an address and then compare
    /// equal, so [`MulticastDelegate::remove`] and
    /// [`MulticastDelegate::contains`] may match either registration.
    ///
    /// [`MulticastDelegate::remove`]: crate::MulticastDelegate::remove
    /// [`MulticastDelegate::contains`]: crate::MulticastDelegate::contains
    pub fn from_method<O>(receiver: &'a O, method: Args::Method<O>) -> Self {
        Self::from_target(InvocationTarget::method(receiver, method))
    }

    /// Binds a method taking an exclusive receiver.
    ///
    /// The receiver is mutably borrowed through the `RefCell` for the duration
    /// of each call; a re-entrant call on the same receiver panics.
    pub fn from_method_mut<O>(receiver: &'a RefCell<O>, method: Args::MethodMut<O>) -> Self {
        Self::from_target(InvocationTarget::method_mut(receiver, method))
    }
}

#[cold]
#[track_caller]
fn null_invocation() -> ! {
    #[cfg(feature = "tracing")]
    {
        tracing::error!("invoked a null delegate");
    }
    panic!("invoked a null delegate")
}

macro_rules! impl_delegate_invoke {
    ($($A:ident $a:ident),*) => {
        impl<'a, R, $($A),*> Delegate<'a, ($($A,)*), R> {
            /// Invokes the bound target.
            ///
            /// # Panics
            ///
            /// Panics if the delegate is null.
            #[inline]
            #[track_caller]
            pub fn invoke(&self, $($a: $A),*) -> R {
                self.apply(($($a,)*))
            }

            /// Invokes the bound target, or returns [`DelegateError::Null`].
            #[inline]
            pub fn try_invoke(&self, $($a: $A),*) -> Result<R, DelegateError> {
                self.try_apply(($($a,)*))
            }
        }
    };
}

for_each_arity!(impl_delegate_invoke);

impl<'a, F, Args, R> From<&'a F> for Delegate<'a, Args, R>
where
    F: Closure<Args, R>,
{
    fn from(closure: &'a F) -> Self {
        Self::from_closure(closure)
    }
}

impl<Args, R> Clone for Delegate<'_, Args, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Args, R> Copy for Delegate<'_, Args, R> {}

impl<Args, R> Default for Delegate<'_, Args, R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'b, Args, R> PartialEq<Delegate<'b, Args, R>> for Delegate<'_, Args, R> {
    fn eq(&self, other: &Delegate<'b, Args, R>) -> bool {
        match (&self.target, &other.target) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<Args, R> Eq for Delegate<'_, Args, R> {}

impl<'b, Args, R> PartialEq<MulticastDelegate<'b, Args, R>> for Delegate<'_, Args, R> {
    fn eq(&self, other: &MulticastDelegate<'b, Args, R>) -> bool {
        other == self
    }
}

impl<Args, R> fmt::Debug for Delegate<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => f.debug_tuple("Delegate").field(target).finish(),
            None => f.write_str("Delegate(null)"),
        }
    }
}
