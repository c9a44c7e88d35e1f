//! Associative transforms: eager, non-mutating map operations.
//!
//! Every operation takes its input map(s) by value and returns a new map;
//! nothing is mutated in place as far as any caller can observe. Moving
//! instead of defensively copying is the Rust rendering of persistence —
//! clone first when the original must stay around.
//!
//! All operations are generic over the map's `BuildHasher`, so they work
//! unchanged with alternative hashers.
//!
//! # Examples
//!
//! ```rust
//! use pliers::assoc::{merge, valmap};
//! use std::collections::HashMap;
//!
//! let defaults = HashMap::from([("retries", 3), ("timeout", 30)]);
//! let overrides = HashMap::from([("timeout", 5)]);
//!
//! let settings = merge([defaults, overrides]);
//! assert_eq!(settings[&"retries"], 3);
//! assert_eq!(settings[&"timeout"], 5); // later mapping wins
//!
//! let doubled = valmap(|v| v * 2, settings);
//! assert_eq!(doubled[&"timeout"], 10);
//! ```

use crate::error::Error;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Merges mappings left to right; on key collision the later mapping
/// wins.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::merge;
/// use std::collections::HashMap;
///
/// let merged = merge([
///     HashMap::from([("a", 1)]),
///     HashMap::from([("a", 2), ("b", 3)]),
/// ]);
/// assert_eq!(merged, HashMap::from([("a", 2), ("b", 3)]));
/// ```
pub fn merge<K, V, S, I>(maps: I) -> HashMap<K, V, S>
where
    I: IntoIterator<Item = HashMap<K, V, S>>,
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    let mut merged = HashMap::default();
    for map in maps {
        merged.extend(map);
    }
    merged
}

/// Merges mappings left to right, combining collided values with `binop`
/// (earlier value first).
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::merge_with;
/// use std::collections::HashMap;
///
/// let total = merge_with(
///     |a, b| a + b,
///     [HashMap::from([("a", 1)]), HashMap::from([("a", 2)])],
/// );
/// assert_eq!(total[&"a"], 3);
/// ```
pub fn merge_with<K, V, S, I, B>(binop: B, maps: I) -> HashMap<K, V, S>
where
    I: IntoIterator<Item = HashMap<K, V, S>>,
    K: Hash + Eq,
    S: BuildHasher + Default,
    B: Fn(V, V) -> V,
{
    let mut merged: HashMap<K, V, S> = HashMap::default();
    for map in maps {
        for (key, value) in map {
            match merged.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    let (key, existing) = slot.remove_entry();
                    merged.insert(key, binop(existing, value));
                }
            }
        }
    }
    merged
}

/// Applies `function` to every key.
///
/// Keys that collide after mapping resolve last-writer-wins, in the
/// map's own iteration order.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::keymap;
/// use std::collections::HashMap;
///
/// let upper = keymap(|k: String| k.to_uppercase(), HashMap::from([("a".to_string(), 1)]));
/// assert_eq!(upper[&"A".to_string()], 1);
/// ```
pub fn keymap<K, K2, V, S, F>(function: F, map: HashMap<K, V, S>) -> HashMap<K2, V, S>
where
    K2: Hash + Eq,
    S: BuildHasher + Default,
    F: Fn(K) -> K2,
{
    map.into_iter()
        .map(|(key, value)| (function(key), value))
        .collect()
}

/// Applies `function` to every value.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::valmap;
/// use std::collections::HashMap;
///
/// let lengths = valmap(|v: String| v.len(), HashMap::from([(1, "abc".to_string())]));
/// assert_eq!(lengths[&1], 3);
/// ```
pub fn valmap<K, V, V2, S, F>(function: F, map: HashMap<K, V, S>) -> HashMap<K, V2, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    F: Fn(V) -> V2,
{
    map.into_iter()
        .map(|(key, value)| (key, function(value)))
        .collect()
}

/// The mapping with `key` set to `value`.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::assoc;
/// use std::collections::HashMap;
///
/// let updated = assoc(HashMap::from([("x", 1)]), "y", 2);
/// assert_eq!(updated, HashMap::from([("x", 1), ("y", 2)]));
/// ```
pub fn assoc<K, V, S>(mut map: HashMap<K, V, S>, key: K, value: V) -> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    map.insert(key, value);
    map
}

/// The mapping with the given keys absent.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::dissoc;
/// use std::collections::HashMap;
///
/// let trimmed = dissoc(HashMap::from([("x", 1), ("y", 2)]), ["y", "z"]);
/// assert_eq!(trimmed, HashMap::from([("x", 1)]));
/// ```
pub fn dissoc<K, V, S, I>(mut map: HashMap<K, V, S>, keys: I) -> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    I: IntoIterator<Item = K>,
{
    for key in keys {
        map.remove(&key);
    }
    map
}

/// Retains only the entries whose key satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::key_filter;
/// use std::collections::HashMap;
///
/// let short = key_filter(
///     |k: &&str| k.len() <= 2,
///     HashMap::from([("ab", 1), ("abc", 2)]),
/// );
/// assert_eq!(short, HashMap::from([("ab", 1)]));
/// ```
pub fn key_filter<K, V, S, P>(predicate: P, mut map: HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: Fn(&K) -> bool,
{
    map.retain(|key, _| predicate(key));
    map
}

/// Retains only the entries whose value satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc::val_filter;
/// use std::collections::HashMap;
///
/// let positive = val_filter(
///     |v: &i32| *v > 0,
///     HashMap::from([("a", 1), ("b", -1)]),
/// );
/// assert_eq!(positive, HashMap::from([("a", 1)]));
/// ```
pub fn val_filter<K, V, S, P>(predicate: P, mut map: HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
    P: Fn(&V) -> bool,
{
    map.retain(|_, value| predicate(value));
    map
}

/// Keyed lookup, or [`Error::KeyNotFound`] naming the missing key.
///
/// # Errors
///
/// [`Error::KeyNotFound`] when the mapping has no entry for `key`.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("rate", 3)]);
/// assert_eq!(assoc::get(&"rate", &map), Ok(&3));
/// assert!(assoc::get(&"missing", &map).is_err());
/// ```
pub fn get<'m, K, V, S>(key: &K, map: &'m HashMap<K, V, S>) -> Result<&'m V, Error>
where
    K: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    map.get(key).ok_or_else(|| Error::KeyNotFound {
        key: format!("{key:?}"),
    })
}

/// Keyed lookup with a fallback.
///
/// # Examples
///
/// ```rust
/// use pliers::assoc;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("rate", 3)]);
/// assert_eq!(assoc::get_or(&"missing", &0, &map), &0);
/// ```
pub fn get_or<'m, K, V, S>(key: &K, default: &'m V, map: &'m HashMap<K, V, S>) -> &'m V
where
    K: Hash + Eq,
    S: BuildHasher,
{
    map.get(key).unwrap_or(default)
}
