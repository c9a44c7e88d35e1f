//! The dynamic callable substrate.
//!
//! Currying, memoization, and dynamic composition all operate on values
//! implementing [`Callable`]: something invocable with an [`Args`] bundle
//! of positional and keyword arguments, carrying an optional declared
//! [`Signature`].
//!
//! The layer is deliberately monomorphic over a caller-chosen value type
//! `A`. A callable over mixed payloads brings its own enum for `A`; fully
//! typed heterogeneous pipelines belong to the macro layer in
//! [`compose`](crate::compose) instead.
//!
//! # Building callables
//!
//! Ordinary Rust functions of fixed arity adapt via [`from_fn1`] ..
//! [`from_fn6`]; the adapter knows the arity from the function type, so the
//! resulting [`RawFn`] carries a [`Signature`] by construction:
//!
//! ```rust
//! use pliers::callable::{from_fn2, Args, Callable};
//!
//! let add = from_fn2(|a: i64, b: i64| a + b);
//! assert_eq!(add.signature().map(pliers::callable::Signature::required), Some(2));
//!
//! let sum = add.invoke(Args::positional([2, 3])).unwrap();
//! assert_eq!(sum, 5);
//! ```
//!
//! Opaque callables are wrapped with [`RawFn::new`]; they declare no
//! signature until the caller supplies one with [`RawFn::with_signature`],
//! and currying one without an override fails with
//! [`Error::SignatureUnavailable`](crate::error::Error::SignatureUnavailable).

mod adapt;
mod args;
mod signature;

pub use adapt::{
    RawFn, from_fn0, from_fn1, from_fn2, from_fn3, from_fn4, from_fn5, from_fn6, variadic,
};
pub use args::Args;
pub use signature::{KeywordSpec, Signature};

use crate::error::Error;
use std::rc::Rc;

/// A value invocable with an [`Args`] bundle.
///
/// Implementors report a declared [`Signature`] when one is known; the
/// curry engine refuses to wrap a callable whose signature is unknown.
///
/// The trait is object safe: wrappers hold `Rc<dyn Callable<A, R>>` and
/// never own the underlying function beyond that reference.
pub trait Callable<A, R = A> {
    /// The declared signature, if known.
    fn signature(&self) -> Option<&Signature>;

    /// Invokes the callable with the supplied arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying function returns; adapters add
    /// [`Error::ArityMismatch`] when the argument bundle cannot be unpacked
    /// into the declared parameter list.
    fn invoke(&self, args: Args<A>) -> Result<R, Error>;
}

impl<A, R, C: Callable<A, R> + ?Sized> Callable<A, R> for Rc<C> {
    fn signature(&self) -> Option<&Signature> {
        (**self).signature()
    }

    fn invoke(&self, args: Args<A>) -> Result<R, Error> {
        (**self).invoke(args)
    }
}
