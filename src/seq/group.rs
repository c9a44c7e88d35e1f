//! Eager grouping operations.
//!
//! These consume their input fully and materialize a map. Key iteration
//! order of the result is unspecified; the binding guarantee is that
//! *within* each group, elements keep first-seen input order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups elements by `key(element)`, preserving input order within each
/// group.
///
/// Every element of the input lands in exactly one group.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::group_by;
///
/// let by_length = group_by(|word: &&str| word.len(), ["a", "bc", "d", "ef"]);
/// assert_eq!(by_length[&1], ["a", "d"]);
/// assert_eq!(by_length[&2], ["bc", "ef"]);
/// ```
pub fn group_by<I, K, F>(key: F, seq: I) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: Fn(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in seq {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Counts occurrences of each distinct element.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::frequencies;
///
/// let counts = frequencies([1, 1, 2, 3, 3, 3]);
/// assert_eq!(counts[&1], 2);
/// assert_eq!(counts[&2], 1);
/// assert_eq!(counts[&3], 3);
/// ```
pub fn frequencies<I>(seq: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut counts: HashMap<I::Item, usize> = HashMap::new();
    for item in seq {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Per-group running left-fold, each group seeded with its own first
/// element.
///
/// A group exists only once its first element arrives, so the fold is
/// never asked to reduce an empty group.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::reduce_by;
///
/// let extremes = reduce_by(|n: &i32| n % 2, |a, b| a.max(b), [1, 2, 3, 4, 5]);
/// assert_eq!(extremes[&0], 4); // largest even
/// assert_eq!(extremes[&1], 5); // largest odd
/// ```
pub fn reduce_by<I, K, F, B>(key: F, binop: B, seq: I) -> HashMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: Fn(&I::Item) -> K,
    B: Fn(I::Item, I::Item) -> I::Item,
{
    let mut reduced: HashMap<K, I::Item> = HashMap::new();
    for item in seq {
        match reduced.entry(key(&item)) {
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
            Entry::Occupied(slot) => {
                let (group, acc) = slot.remove_entry();
                reduced.insert(group, binop(acc, item));
            }
        }
    }
    reduced
}

/// Per-group running left-fold over a separate accumulator type, each
/// group seeded from `init()`.
///
/// Every element — including each group's first — passes through `binop`.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::reduce_by_init;
///
/// let sums = reduce_by_init(|n: &i32| n % 2, |acc, n| acc + n, || 0, [1, 2, 3, 4, 5]);
/// assert_eq!(sums[&0], 6); // evens
/// assert_eq!(sums[&1], 9); // odds
/// ```
pub fn reduce_by_init<I, K, A, F, B, S>(key: F, binop: B, init: S, seq: I) -> HashMap<K, A>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: Fn(&I::Item) -> K,
    B: Fn(A, I::Item) -> A,
    S: Fn() -> A,
{
    let mut reduced: HashMap<K, A> = HashMap::new();
    for item in seq {
        match reduced.entry(key(&item)) {
            Entry::Vacant(slot) => {
                slot.insert(binop(init(), item));
            }
            Entry::Occupied(slot) => {
                let (group, acc) = slot.remove_entry();
                reduced.insert(group, binop(acc, item));
            }
        }
    }
    reduced
}
