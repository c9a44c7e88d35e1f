//! The curry engine: partial application with arity tracking.
//!
//! [`curry`] wraps a [`Callable`] so that under-supplying arguments yields
//! a new partially-applied wrapper instead of invoking the target. A
//! [`Curried`] value is immutable: every application either completes the
//! call or produces a *new* wrapper holding the merged argument state.
//!
//! # Examples
//!
//! ```rust
//! use pliers::callable::from_fn3;
//! use pliers::curry::{curry, Applied};
//!
//! let clamp = from_fn3(|low: i32, high: i32, value: i32| value.clamp(low, high));
//! let clamp = curry(clamp).unwrap();
//!
//! // Feed arguments in any split; saturation triggers the call.
//! let Ok(Applied::Partial(from_zero)) = clamp.call(0) else { panic!() };
//! let Ok(Applied::Partial(percent)) = from_zero.call(100) else { panic!() };
//! assert_eq!(percent.call(250).unwrap().into_done(), Some(100));
//!
//! // The intermediate wrappers are reusable: nothing was consumed.
//! assert_eq!(percent.call(-4).unwrap().into_done(), Some(0));
//! ```
//!
//! Curried wrappers implement [`Callable`] themselves, so they can be
//! composed, memoized, or curried again like any other callable.

use crate::callable::{Args, Callable, Signature};
use crate::error::Error;
use std::fmt;
use std::rc::Rc;

/// The outcome of applying arguments to a [`Curried`] wrapper.
#[derive(Debug)]
pub enum Applied<A, R> {
    /// The merged arguments saturated the target; here is its result.
    Done(R),
    /// Still short of the target's arity: a new wrapper holding the
    /// merged partial state.
    Partial(Curried<A, R>),
}

impl<A, R> Applied<A, R> {
    /// The completed result, if the call saturated.
    pub fn into_done(self) -> Option<R> {
        match self {
            Self::Done(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// The partial wrapper, if the call did not saturate.
    pub fn into_partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Done(_) => None,
            Self::Partial(partial) => Some(partial),
        }
    }

    /// Whether the call completed.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// A callable carrying partially-applied argument state.
///
/// Holds the target callable, the target's full [`Signature`], and the
/// arguments bound so far. Constructed by [`curry`], [`curry_with`], or
/// [`curry_declared`].
pub struct Curried<A, R> {
    target: Rc<dyn Callable<A, R>>,
    full: Signature,
    remaining: Signature,
    bound: Args<A>,
}

impl<A, R> Clone for Curried<A, R>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            full: self.full.clone(),
            remaining: self.remaining.clone(),
            bound: self.bound.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("bound", &self.bound)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Wraps a callable for partial application.
///
/// # Errors
///
/// [`Error::SignatureUnavailable`] if the target declares no signature.
/// Declare one on the target (for example with
/// [`RawFn::with_signature`](crate::callable::RawFn::with_signature)) or
/// use [`curry_declared`] to override here.
pub fn curry<A, R>(target: impl Callable<A, R> + 'static) -> Result<Curried<A, R>, Error>
where
    A: 'static,
    R: 'static,
{
    curry_with(target, Args::new())
}

/// Wraps a callable with an initial partial-argument bundle.
///
/// # Errors
///
/// [`Error::SignatureUnavailable`] if the target declares no signature.
pub fn curry_with<A, R>(
    target: impl Callable<A, R> + 'static,
    bound: Args<A>,
) -> Result<Curried<A, R>, Error>
where
    A: 'static,
    R: 'static,
{
    let full = target
        .signature()
        .cloned()
        .ok_or(Error::SignatureUnavailable)?;
    Ok(Curried::assemble(Rc::new(target), full, bound))
}

/// Wraps a callable under an explicit caller-declared signature, for
/// targets whose own signature cannot be determined.
pub fn curry_declared<A, R>(
    target: impl Callable<A, R> + 'static,
    signature: Signature,
) -> Curried<A, R>
where
    A: 'static,
    R: 'static,
{
    Curried::assemble(Rc::new(target), signature, Args::new())
}

impl<A, R> Curried<A, R> {
    fn assemble(target: Rc<dyn Callable<A, R>>, full: Signature, bound: Args<A>) -> Self {
        let remaining = full.after(&bound);
        Self {
            target,
            full,
            remaining,
            bound,
        }
    }

    /// The arguments bound so far.
    pub const fn bound(&self) -> &Args<A> {
        &self.bound
    }

    /// The signature still expected from future applications.
    pub const fn remaining(&self) -> &Signature {
        &self.remaining
    }
}

impl<A, R> Curried<A, R>
where
    A: Clone,
{
    /// Merges `extra` with the stored partial arguments. If the merged
    /// bundle saturates the target's signature, the target is invoked and
    /// its result (or error, unchanged) returned; otherwise a new wrapper
    /// holding the merged state is returned. `self` is never mutated.
    ///
    /// # Errors
    ///
    /// Whatever the target raises on invocation. Over-supplying a
    /// non-variadic target is forwarded; the target decides (adapters
    /// report [`Error::ArityMismatch`]).
    pub fn apply(&self, extra: Args<A>) -> Result<Applied<A, R>, Error> {
        let merged = self.bound.clone().merge(extra);
        if self.full.satisfied_by(&merged) {
            self.target.invoke(merged).map(Applied::Done)
        } else {
            Ok(Applied::Partial(Self::assemble(
                Rc::clone(&self.target),
                self.full.clone(),
                merged,
            )))
        }
    }

    /// Applies one positional argument. Convenience for the common
    /// one-at-a-time chain.
    ///
    /// # Errors
    ///
    /// See [`Curried::apply`].
    pub fn call(&self, value: A) -> Result<Applied<A, R>, Error> {
        self.apply(Args::positional([value]))
    }

    /// Applies several positional arguments at once.
    ///
    /// # Errors
    ///
    /// See [`Curried::apply`].
    pub fn call_with(&self, values: impl IntoIterator<Item = A>) -> Result<Applied<A, R>, Error> {
        self.apply(Args::positional(values))
    }
}

impl<A, R> Callable<A, R> for Curried<A, R>
where
    A: Clone + 'static,
    R: 'static,
{
    fn signature(&self) -> Option<&Signature> {
        Some(&self.remaining)
    }

    fn invoke(&self, args: Args<A>) -> Result<R, Error> {
        match self.apply(args)? {
            Applied::Done(result) => Ok(result),
            // A bare callable has no way to hand back a wrapper; direct
            // invocation therefore demands saturation.
            Applied::Partial(partial) => Err(Error::ArityMismatch {
                expected: self.full.required(),
                variadic: self.full.is_variadic(),
                received: partial.bound.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{from_fn2, from_fn3, variadic, RawFn};

    fn add3(a: i64, b: i64, c: i64) -> i64 {
        a + b + c
    }

    #[test]
    fn test_split_invariance() {
        let curried = curry(from_fn3(add3)).unwrap();

        let all_at_once = curried.call_with([1, 2, 3]).unwrap().into_done();
        let one_then_two = curried
            .call(1)
            .unwrap()
            .into_partial()
            .unwrap()
            .call_with([2, 3])
            .unwrap()
            .into_done();
        assert_eq!(all_at_once, Some(6));
        assert_eq!(one_then_two, Some(6));
    }

    #[test]
    fn test_wrapper_is_reusable() {
        let curried = curry(from_fn2(|a: i64, b: i64| a * b)).unwrap();
        let doubler = curried.call(2).unwrap().into_partial().unwrap();

        assert_eq!(doubler.call(5).unwrap().into_done(), Some(10));
        assert_eq!(doubler.call(7).unwrap().into_done(), Some(14));
    }

    #[test]
    fn test_opaque_target_needs_override() {
        let opaque = RawFn::new(|args: Args<i32>| Ok(args.positional_len() as i32));
        let error = curry(opaque).map(|_| ()).unwrap_err();
        assert_eq!(error, Error::SignatureUnavailable);
    }

    #[test]
    fn test_declared_override() {
        let opaque = RawFn::new(|args: Args<i32>| {
            Ok(args.positional_args().iter().sum::<i32>())
        });
        let curried = curry_declared(opaque, Signature::new(2));
        let partial = curried.call(1).unwrap().into_partial().unwrap();
        assert_eq!(partial.call(2).unwrap().into_done(), Some(3));
    }

    #[test]
    fn test_oversupply_forwarded_to_target() {
        let curried = curry(from_fn2(|a: i32, b: i32| a + b)).unwrap();
        let result = curried.call_with([1, 2, 3]).unwrap_err();
        assert!(matches!(result, Error::ArityMismatch { expected: 2, .. }));
    }

    #[test]
    fn test_variadic_saturates_at_minimum() {
        let curried = curry(variadic(2, |values: &[i32]| values.len())).unwrap();
        assert_eq!(curried.call_with([1, 2, 3, 4]).unwrap().into_done(), Some(4));
        assert!(!curried.call(1).unwrap().is_done());
    }

    #[test]
    fn test_invoke_requires_saturation() {
        let curried = curry(from_fn3(add3)).unwrap();
        let error = curried.invoke(Args::positional([1])).unwrap_err();
        assert!(matches!(error, Error::ArityMismatch { expected: 3, .. }));
    }

    #[test]
    fn test_curry_a_curried_wrapper() {
        let inner = curry(from_fn3(add3)).unwrap();
        let partway = inner.call(10).unwrap().into_partial().unwrap();

        // Re-currying sees the remaining two-argument signature.
        let outer = curry(partway).unwrap();
        let result = outer
            .call(20)
            .unwrap()
            .into_partial()
            .unwrap()
            .call(30)
            .unwrap()
            .into_done();
        assert_eq!(result, Some(60));
    }

    mod send_sync {
        use super::*;
        use static_assertions::assert_not_impl_any;

        assert_not_impl_any!(Curried<i32, i32>: Send, Sync);
    }
}
