//! Cache storage behind memoized wrappers.

use std::cell::RefCell;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
pub(crate) type Table<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fxhash"))]
pub(crate) type Table<K, V> = std::collections::HashMap<K, V>;

/// Storage a [`Memoized`](super::Memoized) wrapper reads and writes.
///
/// The wrapper only ever needs two operations: fetch a clone of a stored
/// result, and store a new one. Implementations own their interior
/// mutability, which is what lets a cache be shared between wrappers via
/// `Rc` — for cross-wrapper sharing or an external eviction policy.
pub trait Cache<K, V> {
    /// A clone of the stored value for `key`, if present.
    fn fetch(&self, key: &K) -> Option<V>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn store(&self, key: K, value: V);
}

/// The default unbounded cache: single-threaded interior mutability.
///
/// Deliberately `!Sync` — the default concurrency contract is that the
/// caller synchronizes access to a shared wrapper. Enable the `sync`
/// feature and use [`SyncCache`] to opt into internal locking instead.
///
/// # Examples
///
/// ```rust
/// use pliers::memo::{Cache, UnsyncCache};
///
/// let cache = UnsyncCache::new();
/// cache.store("k", 1);
/// assert_eq!(cache.fetch(&"k"), Some(1));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct UnsyncCache<K, V> {
    entries: RefCell<Table<K, V>>,
}

impl<K, V> UnsyncCache<K, V> {
    /// An empty cache.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Table::default()),
        }
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K, V> Default for UnsyncCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: Clone> Cache<K, V> for UnsyncCache<K, V> {
    fn fetch(&self, key: &K) -> Option<V> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: K, value: V) {
        self.entries.borrow_mut().insert(key, value);
    }
}

/// An internally-locked cache for wrappers shared across threads.
///
/// Lookup and insert are each atomic; two racing callers may both compute
/// a missing entry, but at most one result is retained per key.
#[cfg(feature = "sync")]
#[derive(Debug)]
pub struct SyncCache<K, V> {
    entries: parking_lot::Mutex<Table<K, V>>,
}

#[cfg(feature = "sync")]
impl<K, V> SyncCache<K, V> {
    /// An empty cache.
    pub fn new() -> Self {
        Self {
            entries: parking_lot::Mutex::new(Table::default()),
        }
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(feature = "sync")]
impl<K, V> Default for SyncCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "sync")]
impl<K: Hash + Eq, V: Clone> Cache<K, V> for SyncCache<K, V> {
    fn fetch(&self, key: &K) -> Option<V> {
        self.entries.lock().get(key).cloned()
    }

    fn store(&self, key: K, value: V) {
        self.entries.lock().insert(key, value);
    }
}
