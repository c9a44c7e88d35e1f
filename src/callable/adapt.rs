//! Adapters from ordinary Rust functions to [`Callable`].

use super::args::Args;
use super::signature::Signature;
use super::Callable;
use crate::error::Error;
use paste::paste;

/// A boxed callable over a uniform argument type.
///
/// `RawFn` is the bridge between arbitrary Rust closures and the dynamic
/// layer. [`RawFn::new`] wraps an opaque variadic closure with no declared
/// signature — introspection on it is impossible, so currying it without
/// [`RawFn::with_signature`] fails with [`Error::SignatureUnavailable`].
/// The [`from_fn0`] .. [`from_fn6`] and [`variadic`] constructors declare
/// the signature for you.
///
/// # Examples
///
/// ```rust
/// use pliers::callable::{Args, Callable, RawFn, Signature};
///
/// // An opaque callable: signature unknown until declared.
/// let joined = RawFn::new(|args: Args<String>| {
///     Ok(args.positional_args().join("-"))
/// });
/// assert!(joined.signature().is_none());
///
/// let joined = joined.with_signature(Signature::new(2).variadic());
/// let out = joined
///     .invoke(Args::positional(["a".to_string(), "b".to_string()]))
///     .unwrap();
/// assert_eq!(out, "a-b");
/// ```
pub struct RawFn<A, R> {
    run: Box<dyn Fn(Args<A>) -> Result<R, Error>>,
    signature: Option<Signature>,
}

impl<A, R> RawFn<A, R> {
    /// Wraps an opaque callable. No signature is declared.
    pub fn new(function: impl Fn(Args<A>) -> Result<R, Error> + 'static) -> Self {
        Self {
            run: Box::new(function),
            signature: None,
        }
    }

    /// Declares (or overrides) the signature of this callable.
    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }
}

impl<A, R> Callable<A, R> for RawFn<A, R> {
    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    fn invoke(&self, args: Args<A>) -> Result<R, Error> {
        (self.run)(args)
    }
}

/// Adapts a function over a positional argument slice, with a declared
/// minimum arity and unbounded extras.
///
/// # Examples
///
/// ```rust
/// use pliers::callable::{variadic, Args, Callable};
///
/// let sum = variadic(1, |values: &[i64]| values.iter().sum::<i64>());
/// assert_eq!(sum.invoke(Args::positional([1, 2, 3])).unwrap(), 6);
/// assert!(sum.invoke(Args::new()).is_err());
/// ```
pub fn variadic<A, R, F>(min: usize, function: F) -> RawFn<A, R>
where
    A: 'static,
    R: 'static,
    F: Fn(&[A]) -> R + 'static,
{
    let signature = Signature::new(min).variadic();
    RawFn {
        run: Box::new(move |args: Args<A>| {
            if args.has_keywords() || args.positional_len() < min {
                return Err(Error::ArityMismatch {
                    expected: min,
                    variadic: true,
                    received: args.len(),
                });
            }
            Ok(function(args.positional_args()))
        }),
        signature: Some(signature),
    }
}

// Expands each parameter ident to the uniform argument type.
macro_rules! uniform_arg {
    ($param:ident) => {
        A
    };
}

macro_rules! fixed_arity_adapters {
    ($( $arity:literal => ( $($param:ident),* ) ),+ $(,)?) => { $( paste! {
        #[doc = concat!(
            "Adapts a function of ", stringify!($arity),
            " homogeneous arguments into a [`RawFn`] whose signature is known by construction.",
        )]
        ///
        /// Invoking the adapter with any keyword arguments, or with a
        /// positional count other than the declared arity, is an
        /// [`Error::ArityMismatch`] — the adapter is the callable's own
        /// argument boundary.
        pub fn [<from_fn $arity>]<A, R, F>(function: F) -> RawFn<A, R>
        where
            A: 'static,
            R: 'static,
            F: Fn($(uniform_arg!($param)),*) -> R + 'static,
        {
            RawFn {
                run: Box::new(move |args: Args<A>| {
                    let mismatch = Error::ArityMismatch {
                        expected: $arity,
                        variadic: false,
                        received: args.len(),
                    };
                    if args.has_keywords() {
                        return Err(mismatch);
                    }
                    let values = args.into_positional().into_vec();
                    let Ok([$($param),*]) = <[A; $arity]>::try_from(values) else {
                        return Err(mismatch);
                    };
                    Ok(function($($param),*))
                }),
                signature: Some(Signature::new($arity)),
            }
        }
    } )+ };
}

fixed_arity_adapters! {
    0 => (),
    1 => (first),
    2 => (first, second),
    3 => (first, second, third),
    4 => (first, second, third, fourth),
    5 => (first, second, third, fourth, fifth),
    6 => (first, second, third, fourth, fifth, sixth),
}
