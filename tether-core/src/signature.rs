//! # Call Signatures
//!
//! A delegate family is described by two type parameters: the argument tuple
//! `Args` and the return type `R`. A `Delegate<'a, (i32, &str), bool>` binds
//! anything callable as `fn(i32, &str) -> bool`.
//!
//! [`Signature`] is implemented for every tuple of up to eight elements. It
//! names the function-pointer shapes each binding kind accepts and converts
//! those pointers to and from the erased address stored in an
//! [`InvocationTarget`].
//!
//! [`Closure`] is the bridge for callable objects: it is implemented for every
//! `Fn` type whose parameter list matches the tuple.
//!
//! [`InvocationTarget`]: crate::InvocationTarget

use std::mem;

mod sealed {
    pub trait Sealed {}
}

/// The argument tuple of a delegate family returning `R`.
///
/// Sealed: it is implemented for `()`, `(A0,)`, `(A0, A1)` and so on up to
/// eight elements, and cannot be implemented outside this crate. The
/// delegate types only require it on their binding constructors.
///
/// ```compile_fail
/// use tether_core::Signature;
///
/// struct Packet;
///
/// impl Signature<()> for Packet {
///     type Function = fn();
///     type Method<O> = fn(&O);
///     type MethodMut<O> = fn(&mut O);
///
///     fn erase_function(function: fn()) -> *const () { function as *const () }
///     fn erase_method<O>(method: fn(&O)) -> *const () { method as *const () }
///     fn erase_method_mut<O>(method: fn(&mut O)) -> *const () { method as *const () }
///     unsafe fn call_function(_: *const (), _: Self) {}
///     unsafe fn call_method<O>(_: *const (), _: &O, _: Self) {}
///     unsafe fn call_method_mut<O>(_: *const (), _: &mut O, _: Self) {}
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a delegate argument list",
    label = "expected a tuple of at most eight argument types",
    note = "Delegate arguments are written as a tuple, e.g. `Delegate<'_, (i32, String), bool>`."
)]
pub trait Signature<R>: sealed::Sealed + Sized {
    /// `fn(A0, A1, ...) -> R`
    type Function: Copy;
    /// `fn(&O, A0, A1, ...) -> R`
    type Method<O>: Copy;
    /// `fn(&mut O, A0, A1, ...) -> R`
    type MethodMut<O>: Copy;

    /// Erases a free function pointer to its address.
    fn erase_function(function: Self::Function) -> *const ();

    /// Erases a shared-receiver method pointer to its address.
    fn erase_method<O>(method: Self::Method<O>) -> *const ();

    /// Erases an exclusive-receiver method pointer to its address.
    fn erase_method_mut<O>(method: Self::MethodMut<O>) -> *const ();

    /// Calls the free function at `raw` with the unpacked arguments.
    ///
    /// # Safety
    ///
    /// `raw` must come from [`Signature::erase_function`] on this same
    /// implementation.
    unsafe fn call_function(raw: *const (), args: Self) -> R;

    /// Calls the shared-receiver method at `raw` on `receiver`.
    ///
    /// # Safety
    ///
    /// `raw` must come from [`Signature::erase_method`] on this same
    /// implementation, instantiated with the same `O`.
    unsafe fn call_method<O>(raw: *const (), receiver: &O, args: Self) -> R;

    /// Calls the exclusive-receiver method at `raw` on `receiver`.
    ///
    /// # Safety
    ///
    /// `raw` must come from [`Signature::erase_method_mut`] on this same
    /// implementation, instantiated with the same `O`.
    unsafe fn call_method_mut<O>(raw: *const (), receiver: &mut O, args: Self) -> R;
}

/// A callable object that accepts the argument tuple `Args`.
///
/// Implemented for every `F: Fn(A0, A1, ...) -> R`, so closures, function
/// items and function pointers all qualify.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "not callable with this argument list",
    note = "Closures bound to a delegate must be `Fn` and match the delegate's argument tuple."
)]
pub trait Closure<Args, R> {
    /// Calls the object with the unpacked arguments.
    fn call_with(&self, args: Args) -> R;
}

macro_rules! impl_signature {
    ($($A:ident $a:ident),*) => {
        impl<$($A),*> sealed::Sealed for ($($A,)*) {}

        impl<R, $($A),*> Signature<R> for ($($A,)*) {
            type Function = fn($($A),*) -> R;
            type Method<O> = fn(&O, $($A),*) -> R;
            type MethodMut<O> = fn(&mut O, $($A),*) -> R;

            #[inline]
            fn erase_function(function: Self::Function) -> *const () {
                function as *const ()
            }

            #[inline]
            fn erase_method<O>(method: Self::Method<O>) -> *const () {
                method as *const ()
            }

            #[inline]
            fn erase_method_mut<O>(method: Self::MethodMut<O>) -> *const () {
                method as *const ()
            }

            #[inline]
            unsafe fn call_function(raw: *const (), ($($a,)*): Self) -> R {
                // SAFETY: `raw` was produced by `erase_function` from a
                // pointer of exactly this type (guaranteed by the caller).
                let function = unsafe { mem::transmute::<*const (), fn($($A),*) -> R>(raw) };
                function($($a),*)
            }

            #[inline]
            unsafe fn call_method<O>(raw: *const (), receiver: &O, ($($a,)*): Self) -> R {
                // SAFETY: `raw` was produced by `erase_method::<O>`
                // (guaranteed by the caller).
                let method = unsafe { mem::transmute::<*const (), fn(&O, $($A),*) -> R>(raw) };
                method(receiver, $($a),*)
            }

            #[inline]
            unsafe fn call_method_mut<O>(raw: *const (), receiver: &mut O, ($($a,)*): Self) -> R {
                // SAFETY: `raw` was produced by `erase_method_mut::<O>`
                // (guaranteed by the caller).
                let method = unsafe { mem::transmute::<*const (), fn(&mut O, $($A),*) -> R>(raw) };
                method(receiver, $($a),*)
            }
        }

        impl<F, R, $($A),*> Closure<($($A,)*), R> for F
        where
            F: Fn($($A),*) -> R,
        {
            #[inline]
            fn call_with(&self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }
    };
}

/// Expands `$mac!` once per supported arity, from zero to eight arguments.
macro_rules! for_each_arity {
    ($mac:ident) => {
        $mac!();
        $mac!(A0 a0);
        $mac!(A0 a0, A1 a1);
        $mac!(A0 a0, A1 a1, A2 a2);
        $mac!(A0 a0, A1 a1, A2 a2, A3 a3);
        $mac!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
        $mac!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
        $mac!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
        $mac!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
    };
}

pub(crate) use for_each_arity;

for_each_arity!(impl_signature);
