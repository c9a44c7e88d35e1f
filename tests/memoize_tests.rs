//! Integration tests for the memoizer.

#![cfg(feature = "memoize")]

use pliers::callable::{from_fn1, from_fn2, Args, Callable, RawFn, Signature};
use pliers::curry::curry;
use pliers::error::Error;
use pliers::memo::{memoize, memoize_with, ArgsKey, Cache, UnsyncCache};
use std::cell::Cell;
use std::rc::Rc;

/// A callable that counts its own underlying invocations.
fn counting_add() -> (Rc<Cell<usize>>, impl Callable<i64, i64> + 'static) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let target = from_fn2(move |a: i64, b: i64| {
        counter.set(counter.get() + 1);
        a + b
    });
    (calls, target)
}

// =============================================================================
// Hit/miss behavior
// =============================================================================

#[test]
fn test_exactly_one_invocation_per_key() {
    let (calls, target) = counting_add();
    let wrapped = memoize(target);

    for _ in 0..5 {
        assert_eq!(wrapped.invoke(Args::positional([2, 3])).unwrap(), 5);
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_distinct_keys_each_invoke() {
    let (calls, target) = counting_add();
    let wrapped = memoize(target);

    assert_eq!(wrapped.invoke(Args::positional([1, 1])).unwrap(), 2);
    assert_eq!(wrapped.invoke(Args::positional([1, 2])).unwrap(), 3);
    // Positional order matters: (2, 1) is a different key from (1, 2).
    assert_eq!(wrapped.invoke(Args::positional([2, 1])).unwrap(), 3);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_cloned_wrapper_shares_the_cache() {
    let (calls, target) = counting_add();
    let wrapped = memoize(target);
    let alias = wrapped.clone();

    assert_eq!(wrapped.invoke(Args::positional([4, 4])).unwrap(), 8);
    assert_eq!(alias.invoke(Args::positional([4, 4])).unwrap(), 8);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Error paths
// =============================================================================

#[test]
fn test_failures_recompute_next_time() {
    let attempts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&attempts);
    let eventually = RawFn::new(move |args: Args<i64>| {
        counter.set(counter.get() + 1);
        if counter.get() < 3 {
            Err(Error::SignatureUnavailable)
        } else {
            Ok(args.positional_args().iter().copied().sum::<i64>())
        }
    });

    let wrapped = memoize(eventually);
    let args = Args::positional([1, 2, 3]);

    assert!(wrapped.invoke(args.clone()).is_err());
    assert!(wrapped.invoke(args.clone()).is_err());
    assert_eq!(wrapped.invoke(args.clone()).unwrap(), 6);
    // Now cached: no further attempts.
    assert_eq!(wrapped.invoke(args).unwrap(), 6);
    assert_eq!(attempts.get(), 3);
}

#[test]
fn test_key_failure_precedes_invocation() {
    let (calls, target) = counting_add();
    let wrapped = memoize_with(target, |_args: &Args<i64>| -> Result<u8, Error> {
        Err(Error::UnhashableArguments)
    });

    assert_eq!(
        wrapped.invoke(Args::positional([1, 2])).unwrap_err(),
        Error::UnhashableArguments
    );
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Key derivation
// =============================================================================

#[test]
fn test_custom_key_collapses_classes() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = memoize_with(
        from_fn1(move |text: String| {
            counter.set(counter.get() + 1);
            text.len()
        }),
        // Case-insensitive cache key.
        |args| {
            args.positional_args()
                .first()
                .map(|s| s.to_lowercase())
                .ok_or(Error::UnhashableArguments)
        },
    );

    assert_eq!(wrapped.invoke(Args::positional(["Hey".to_string()])).unwrap(), 3);
    assert_eq!(wrapped.invoke(Args::positional(["HEY".to_string()])).unwrap(), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_keyword_order_is_canonical() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let target = RawFn::new(move |args: Args<i32>| {
        counter.set(counter.get() + 1);
        Ok(args.keywords().values().sum::<i32>())
    });
    let wrapped = memoize(target);

    // Same keywords supplied in different textual order: one key.
    let forward = Args::<i32>::new()
        .with_keyword("alpha", 1)
        .with_keyword("beta", 2);
    let backward = Args::<i32>::new()
        .with_keyword("beta", 2)
        .with_keyword("alpha", 1);

    assert_eq!(wrapped.invoke(forward).unwrap(), 3);
    assert_eq!(wrapped.invoke(backward).unwrap(), 3);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Caller-supplied caches
// =============================================================================

#[test]
fn test_external_cache_handle_observes_growth() {
    let cache: Rc<UnsyncCache<ArgsKey<i64>, i64>> = Rc::new(UnsyncCache::new());
    let (calls, target) = counting_add();
    let wrapped =
        memoize(target).with_cache(Rc::<UnsyncCache<_, _>>::clone(&cache) as Rc<dyn Cache<_, _>>);

    assert!(cache.is_empty());
    wrapped.invoke(Args::positional([1, 2])).unwrap();
    wrapped.invoke(Args::positional([3, 4])).unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Layering with the other wrappers
// =============================================================================

#[test]
fn test_memoize_then_curry() {
    let (calls, target) = counting_add();
    let memoized = memoize(target);
    let curried = curry(memoized).unwrap();

    let add_five = curried.call(5).unwrap().into_partial().unwrap();
    assert_eq!(add_five.call(1).unwrap().into_done(), Some(6));
    assert_eq!(add_five.call(1).unwrap().into_done(), Some(6));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_curry_then_memoize() {
    let (calls, target) = counting_add();
    let curried = curry(target).unwrap();
    let wrapped = memoize(curried);

    assert_eq!(wrapped.invoke(Args::positional([2, 2])).unwrap(), 4);
    assert_eq!(wrapped.invoke(Args::positional([2, 2])).unwrap(), 4);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_memoized_signature_passthrough() {
    let (_, target) = counting_add();
    let wrapped = memoize(target);
    assert_eq!(wrapped.signature().map(Signature::required), Some(2));
}
