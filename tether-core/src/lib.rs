//! # tether-core
//!
//! Core delegate types for the Tether callback library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! libraries that only need to expose or accept delegates, without the
//! observers and testing utilities of `tether-std`.
//!
//! # Three-Layer Architecture
//!
//! ## Layer 1: Invocation Target ([`InvocationTarget`])
//!
//! The atomic unit of type erasure: an opaque, non-owning context plus a
//! monomorphised trampoline that dispatches back to the concrete callable.
//!
//! - **Allocation-free**: binding stores two addresses and a function pointer
//! - **Comparable**: equality is identity of the bound receiver and callee
//! - **Borrow-checked**: the `'a` lifetime ties every target to its receiver
//!
//! ## Layer 2: Single Delegate ([`Delegate`])
//!
//! A copyable handle holding at most one target. Binds free functions, methods
//! with shared or exclusive receivers, and closures behind one signature.
//!
//! ## Layer 3: Multicast Delegate ([`MulticastDelegate`])
//!
//! An ordered, owned sequence of targets for event-style fan-out. Merging is
//! flattening, equality is ordered, invocation is sequential.
//!
//! # Signatures
//!
//! Delegates are parameterised by an argument tuple and a return type; see
//! [`Signature`] and [`Closure`].
//!
//! # Error Types
//!
//! - [`DelegateError`] - Checked invocation of a null delegate
//! - [`HandlerError`] - A fallible handler aborted a multicast invocation

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod delegate;
mod error;
mod multicast;
mod signature;
mod target;

// Re-exports
pub use delegate::Delegate;
pub use error::{BoxError, DelegateError, HandlerError};
pub use multicast::MulticastDelegate;
pub use signature::{Closure, Signature};
pub use target::InvocationTarget;
