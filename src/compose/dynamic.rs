//! Dynamic composition over [`Callable`] values.

use crate::callable::{Args, Callable, Signature};
use crate::error::Error;
use std::rc::Rc;

/// An ordered right-to-left chain of callables, itself a callable.
///
/// Stages are listed outermost-first, mirroring
/// [`compose!`](crate::compose!): invocation hands the raw argument bundle
/// to the **last** listed stage, then feeds each result leftward as a
/// single positional argument, ending with the **first** listed stage
/// producing the final value.
///
/// Because every stage maps the uniform value type to itself, a
/// `Composed<A>` is `Callable<A, A>` — which is exactly what lets it be
/// curried, memoized, or placed inside another `Composed`. Its reported
/// signature is the innermost stage's (that is the one facing the caller's
/// arguments); a chain with no stages reports none.
///
/// # Examples
///
/// ```rust
/// use pliers::callable::{from_fn1, from_fn2, Args, Callable};
/// use pliers::compose::Composed;
///
/// let sum_then_double = Composed::of(from_fn2(|a: i64, b: i64| a + b))
///     .then_outer(from_fn1(|n: i64| n * 2));
///
/// let result = sum_then_double.invoke(Args::positional([3, 4])).unwrap();
/// assert_eq!(result, 14);
/// ```
pub struct Composed<A> {
    /// Outermost first; the last stage touches the raw arguments.
    stages: Vec<Rc<dyn Callable<A, A>>>,
}

impl<A> Clone for Composed<A> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<A: 'static> Composed<A> {
    /// A chain from already-collected stages, outermost first.
    ///
    /// An empty chain behaves as the unary identity and reports no
    /// signature.
    pub const fn new(stages: Vec<Rc<dyn Callable<A, A>>>) -> Self {
        Self { stages }
    }

    /// A single-stage chain around the innermost callable.
    pub fn of(innermost: impl Callable<A, A> + 'static) -> Self {
        Self {
            stages: vec![Rc::new(innermost)],
        }
    }

    /// Adds a stage *outside* the current chain: it will receive the
    /// chain's present output. Reads like `pipe`: build inner-to-outer.
    #[must_use]
    pub fn then_outer(mut self, stage: impl Callable<A, A> + 'static) -> Self {
        self.stages.insert(0, Rc::new(stage));
        self
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<A: 'static> Callable<A, A> for Composed<A> {
    fn signature(&self) -> Option<&Signature> {
        self.stages.last().and_then(|stage| stage.signature())
    }

    fn invoke(&self, args: Args<A>) -> Result<A, Error> {
        let Some((innermost, outer)) = self.stages.split_last() else {
            // Identity on a single positional argument.
            let received = args.len();
            return args.into_positional().into_iter().next().ok_or(
                Error::ArityMismatch {
                    expected: 1,
                    variadic: false,
                    received,
                },
            );
        };
        let mut value = innermost.invoke(args)?;
        for stage in outer.iter().rev() {
            value = stage.invoke(Args::positional([value]))?;
        }
        Ok(value)
    }
}
