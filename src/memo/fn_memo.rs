//! Typed memo wrappers for plain Rust functions.
//!
//! When a function's argument types are statically known, there is no need
//! for the dynamic layer: these wrappers cache directly on the typed
//! arguments.

use super::cache::Table;
use std::cell::RefCell;
use std::hash::Hash;

/// A memoized single-argument function.
///
/// # Examples
///
/// ```rust
/// use pliers::memo::FnMemo1;
/// use std::cell::Cell;
///
/// let computed = Cell::new(0);
/// let square = FnMemo1::new(|n: &u64| {
///     computed.set(computed.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(computed.get(), 1);
/// ```
pub struct FnMemo1<T, R, F> {
    function: F,
    cache: RefCell<Table<T, R>>,
}

impl<T, R, F> FnMemo1<T, R, F>
where
    T: Hash + Eq,
    R: Clone,
    F: Fn(&T) -> R,
{
    /// Wraps `function` with a fresh unbounded cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(Table::default()),
        }
    }

    /// Invokes, consulting the cache first.
    pub fn call(&self, input: T) -> R {
        if let Some(hit) = self.cache.borrow().get(&input) {
            return hit.clone();
        }
        let result = (self.function)(&input);
        self.cache.borrow_mut().insert(input, result.clone());
        result
    }

    /// Number of cached results.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

/// A memoized two-argument function; the cache key is the argument pair.
///
/// # Examples
///
/// ```rust
/// use pliers::memo::FnMemo2;
///
/// let power = FnMemo2::new(|base: &u64, exponent: &u32| base.pow(*exponent));
/// assert_eq!(power.call(2, 10), 1024);
/// assert_eq!(power.call(2, 10), 1024);
/// assert_eq!(power.cached(), 1);
/// ```
pub struct FnMemo2<T, U, R, F> {
    function: F,
    cache: RefCell<Table<(T, U), R>>,
}

impl<T, U, R, F> FnMemo2<T, U, R, F>
where
    T: Hash + Eq,
    U: Hash + Eq,
    R: Clone,
    F: Fn(&T, &U) -> R,
{
    /// Wraps `function` with a fresh unbounded cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(Table::default()),
        }
    }

    /// Invokes, consulting the cache first.
    pub fn call(&self, first: T, second: U) -> R {
        let key = (first, second);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let result = (self.function)(&key.0, &key.1);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Number of cached results.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}
