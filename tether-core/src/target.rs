//! # Invocation Targets
//!
//! The atomic unit of type erasure. An [`InvocationTarget`] is an opaque,
//! non-owning context paired with a trampoline: a monomorphised dispatch
//! function that knows how to turn that context back into a call on the
//! concrete function, method or closure it was built from.
//!
//! Targets never allocate and are `Copy`. Equality is identity: two targets
//! are equal when their receiver, callee and trampoline addresses all match.
//!
//! # Safety Invariant
//!
//! Targets are only created through the constructors in this module, each of
//! which pairs a context with the trampoline instantiated for the exact types
//! that context was erased from. The `'a` lifetime is the borrow of the
//! receiver, so the receiver outlives every copy of the target.

use crate::signature::{Closure, Signature};
use std::{cell::RefCell, fmt, marker::PhantomData};

/// Erased receiver and callee addresses.
///
/// `receiver` is null for free functions; `callee` is null for closures.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Context {
    receiver: *const (),
    callee: *const (),
}

type Trampoline<Args, R> = unsafe fn(Context, Args) -> R;

/// A bound call to something of unknown concrete type.
///
/// See the [module documentation](self) for the safety invariant.
pub struct InvocationTarget<'a, Args, R> {
    context: Context,
    trampoline: Trampoline<Args, R>,
    _borrow: PhantomData<&'a ()>,
}

impl<'a, Args, R> InvocationTarget<'a, Args, R> {
    #[inline]
    fn from_parts(context: Context, trampoline: Trampoline<Args, R>) -> Self {
        Self {
            context,
            trampoline,
            _borrow: PhantomData,
        }
    }

    /// Creates a target that calls `closure` by reference.
    pub(crate) fn closure<F>(closure: &'a F) -> Self
    where
        F: Closure<Args, R>,
    {
        let context = Context {
            receiver: (closure as *const F).cast(),
            callee: std::ptr::null(),
        };
        Self::from_parts(context, closure_stub::<F, Args, R>)
    }

    /// Returns `true` if the target has no receiver, i.e. it calls a free
    /// function.
    #[inline]
    pub fn is_function(&self) -> bool {
        self.context.receiver.is_null()
    }

    /// Calls the bound function, method or closure.
    #[inline]
    pub fn call(&self, args: Args) -> R {
        // SAFETY: `context` and `trampoline` were paired by one of the
        // constructors in this module, and the receiver is borrowed for `'a`,
        // which outlives `&self`.
        unsafe { (self.trampoline)(self.context, args) }
    }

    #[inline]
    fn trampoline_addr(&self) -> *const () {
        self.trampoline as *const ()
    }
}

impl<'a, Args, R> InvocationTarget<'a, Args, R>
where
    Args: Signature<R>,
{
    /// Creates a target that calls a free function.
    pub(crate) fn function(function: Args::Function) -> Self {
        let context = Context {
            receiver: std::ptr::null(),
            callee: Args::erase_function(function),
        };
        Self::from_parts(context, function_stub::<Args, R>)
    }

    /// Creates a target that calls `method` on a shared receiver.
    pub(crate) fn method<O>(receiver: &'a O, method: Args::Method<O>) -> Self {
        let context = Context {
            receiver: (receiver as *const O).cast(),
            callee: Args::erase_method::<O>(method),
        };
        Self::from_parts(context, method_stub::<O, Args, R>)
    }

    /// Creates a target that calls `method` on an exclusively borrowed
    /// receiver.
    pub(crate) fn method_mut<O>(receiver: &'a RefCell<O>, method: Args::MethodMut<O>) -> Self {
        let context = Context {
            receiver: (receiver as *const RefCell<O>).cast(),
            callee: Args::erase_method_mut::<O>(method),
        };
        Self::from_parts(context, method_mut_stub::<O, Args, R>)
    }
}

// Shallow duplication: the receiver is shared, never cloned.
impl<Args, R> Clone for InvocationTarget<'_, Args, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.context = source.context;
        self.trampoline = source.trampoline;
    }
}

impl<Args, R> Copy for InvocationTarget<'_, Args, R> {}

impl<'b, Args, R> PartialEq<InvocationTarget<'b, Args, R>> for InvocationTarget<'_, Args, R> {
    #[inline]
    fn eq(&self, other: &InvocationTarget<'b, Args, R>) -> bool {
        self.context == other.context && self.trampoline_addr() == other.trampoline_addr()
    }
}

impl<Args, R> Eq for InvocationTarget<'_, Args, R> {}

impl<Args, R> fmt::Debug for InvocationTarget<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationTarget")
            .field("receiver", &self.context.receiver)
            .field("callee", &self.context.callee)
            .field("trampoline", &self.trampoline_addr())
            .finish()
    }
}

// ============================================================================
// Trampolines
// ============================================================================

/// # Safety
///
/// `context.callee` must come from `Args::erase_function`.
unsafe fn function_stub<Args: Signature<R>, R>(context: Context, args: Args) -> R {
    // SAFETY: guaranteed by the caller.
    unsafe { Args::call_function(context.callee, args) }
}

/// # Safety
///
/// `context.receiver` must point to a live `O` and `context.callee` must come
/// from `Args::erase_method::<O>`.
unsafe fn method_stub<O, Args: Signature<R>, R>(context: Context, args: Args) -> R {
    // SAFETY: guaranteed by the caller.
    unsafe {
        let receiver = &*context.receiver.cast::<O>();
        Args::call_method::<O>(context.callee, receiver, args)
    }
}

/// # Safety
///
/// `context.receiver` must point to a live `RefCell<O>` and `context.callee`
/// must come from `Args::erase_method_mut::<O>`.
unsafe fn method_mut_stub<O, Args: Signature<R>, R>(context: Context, args: Args) -> R {
    // SAFETY: guaranteed by the caller.
    let cell = unsafe { &*context.receiver.cast::<RefCell<O>>() };
    // Re-entrant calls on the same receiver panic here instead of aliasing.
    let mut receiver = cell.borrow_mut();
    // SAFETY: guaranteed by the caller.
    unsafe { Args::call_method_mut::<O>(context.callee, &mut *receiver, args) }
}

/// # Safety
///
/// `context.receiver` must point to a live `F`.
unsafe fn closure_stub<F: Closure<Args, R>, Args, R>(context: Context, args: Args) -> R {
    // SAFETY: guaranteed by the caller.
    let closure = unsafe { &*context.receiver.cast::<F>() };
    closure.call_with(args)
}
