//! Memoization: result caching keyed by arguments.
//!
//! [`memoize`] wraps a [`Callable`] with a cache. Each invocation derives
//! a key from the argument bundle, consults the cache, and only invokes
//! the wrapped callable on a miss. Only successful results are cached —
//! an error is returned to the caller and the next invocation with the
//! same key computes again.
//!
//! The default key is the positional argument list plus the canonically
//! ordered keyword list, available whenever the argument type is
//! `Hash + Eq + Clone` — the capability is a compile-time bound, so the
//! default path cannot fail at runtime. Callers with argument types that
//! cannot carry those bounds supply their own (fallible) key function via
//! [`memoize_with`], reporting
//! [`Error::UnhashableArguments`](crate::error::Error::UnhashableArguments)
//! for values they cannot encode.
//!
//! # Concurrency contract
//!
//! The default cache ([`UnsyncCache`]) is `!Sync`: a wrapper shared
//! between threads is the caller's responsibility to synchronize. The
//! `sync` feature adds [`SyncCache`] for opting into internal locking.
//!
//! # Examples
//!
//! ```rust
//! use pliers::callable::{from_fn1, Args, Callable};
//! use pliers::memo::memoize;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let invocations = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&invocations);
//! let slow_double = memoize(from_fn1(move |n: u64| {
//!     counter.set(counter.get() + 1);
//!     n * 2
//! }));
//!
//! assert_eq!(slow_double.invoke(Args::positional([21])).unwrap(), 42);
//! assert_eq!(slow_double.invoke(Args::positional([21])).unwrap(), 42);
//! assert_eq!(invocations.get(), 1); // second call was a cache hit
//! ```

mod cache;
mod fn_memo;

pub use cache::{Cache, UnsyncCache};
#[cfg(feature = "sync")]
pub use cache::SyncCache;
pub use fn_memo::{FnMemo1, FnMemo2};

use crate::callable::{Args, Callable, Signature};
use crate::error::Error;
use std::hash::Hash;
use std::rc::Rc;

/// The default cache key: positional arguments in order, keyword
/// arguments in canonical name order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgsKey<A> {
    positional: Vec<A>,
    keywords: Vec<(String, A)>,
}

impl<A: Clone> ArgsKey<A> {
    /// Derives the key from an argument bundle.
    pub fn of(args: &Args<A>) -> Self {
        Self {
            positional: args.positional_args().to_vec(),
            keywords: args
                .keywords()
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }
}

/// A callable wrapped with a result cache.
///
/// Created by [`memoize`] or [`memoize_with`]; the cache itself can be
/// swapped for a caller-supplied one via [`Memoized::with_cache`]. The
/// cache grows without bound for the lifetime of the wrapper (or of the
/// shared cache handle).
pub struct Memoized<A, R, K = ArgsKey<A>> {
    target: Rc<dyn Callable<A, R>>,
    derive_key: Rc<dyn Fn(&Args<A>) -> Result<K, Error>>,
    cache: Rc<dyn Cache<K, R>>,
}

impl<A, R, K> Clone for Memoized<A, R, K> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            derive_key: Rc::clone(&self.derive_key),
            cache: Rc::clone(&self.cache),
        }
    }
}

/// Wraps a callable with the default argument-derived cache key and a
/// fresh unbounded [`UnsyncCache`].
pub fn memoize<A, R>(target: impl Callable<A, R> + 'static) -> Memoized<A, R>
where
    A: Hash + Eq + Clone + 'static,
    R: Clone + 'static,
{
    Memoized {
        target: Rc::new(target),
        derive_key: Rc::new(|args| Ok(ArgsKey::of(args))),
        cache: Rc::new(UnsyncCache::new()),
    }
}

/// Wraps a callable with an explicit cache-key function.
///
/// The key function may fail — typically with
/// [`Error::UnhashableArguments`](crate::error::Error::UnhashableArguments)
/// — in which case the wrapped callable is *not* invoked and the failure
/// surfaces immediately.
pub fn memoize_with<A, R, K>(
    target: impl Callable<A, R> + 'static,
    derive_key: impl Fn(&Args<A>) -> Result<K, Error> + 'static,
) -> Memoized<A, R, K>
where
    A: 'static,
    R: Clone + 'static,
    K: Hash + Eq + 'static,
{
    Memoized {
        target: Rc::new(target),
        derive_key: Rc::new(derive_key),
        cache: Rc::new(UnsyncCache::new()),
    }
}

impl<A, R, K> Memoized<A, R, K> {
    /// Replaces the cache with a caller-supplied one.
    ///
    /// Sharing one cache handle between wrappers (or keeping a handle to
    /// evict from outside) is the intended use.
    #[must_use]
    pub fn with_cache(mut self, cache: Rc<dyn Cache<K, R>>) -> Self {
        self.cache = cache;
        self
    }
}

impl<A, R, K> Callable<A, R> for Memoized<A, R, K>
where
    A: 'static,
    R: Clone + 'static,
    K: 'static,
{
    fn signature(&self) -> Option<&Signature> {
        self.target.signature()
    }

    fn invoke(&self, args: Args<A>) -> Result<R, Error> {
        let key = (self.derive_key)(&args)?;
        if let Some(hit) = self.cache.fetch(&key) {
            return Ok(hit);
        }
        let result = self.target.invoke(args)?;
        self.cache.store(key, result.clone());
        Ok(result)
    }
}
