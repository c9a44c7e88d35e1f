//! Eager single-element extraction and whole-sequence probes.
//!
//! [`last`], [`nth`], and [`count`] consume their input; on an unbounded
//! source they never return. That is a property of the request, not a
//! defect — ask for the last element of an endless stream and you will
//! wait forever.

use super::Seen;
use crate::error::Error;
use std::hash::Hash;

/// The first element, if any.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::first;
///
/// assert_eq!(first([7, 8, 9]), Some(7));
/// assert_eq!(first(Vec::<i32>::new()), None);
/// ```
pub fn first<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().next()
}

/// The second element, if any.
pub fn second<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().nth(1)
}

/// The element at `index` (zero-based), if any.
pub fn nth<I: IntoIterator>(index: usize, seq: I) -> Option<I::Item> {
    seq.into_iter().nth(index)
}

/// The final element, if any. Consumes the whole sequence.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::last;
///
/// assert_eq!(last(1..=4), Some(4));
/// ```
pub fn last<I: IntoIterator>(seq: I) -> Option<I::Item> {
    seq.into_iter().last()
}

/// The element at `index`, or [`Error::IndexOutOfRange`] naming how many
/// elements the sequence actually produced.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] when the sequence is too short.
///
/// # Examples
///
/// ```rust
/// use pliers::error::Error;
/// use pliers::seq::get;
///
/// assert_eq!(get(1, [10, 20, 30]), Ok(20));
/// assert_eq!(
///     get(5, [10, 20, 30]),
///     Err(Error::IndexOutOfRange { index: 5, length: 3 })
/// );
/// ```
pub fn get<I: IntoIterator>(index: usize, seq: I) -> Result<I::Item, Error> {
    let mut length = 0;
    for item in seq {
        if length == index {
            return Ok(item);
        }
        length += 1;
    }
    Err(Error::IndexOutOfRange { index, length })
}

/// The element at `index`, or `default` when the sequence is too short.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::get_or;
///
/// assert_eq!(get_or(9, -1, [10, 20]), -1);
/// ```
pub fn get_or<I: IntoIterator>(index: usize, default: I::Item, seq: I) -> I::Item {
    nth(index, seq).unwrap_or(default)
}

/// The number of elements, by full consumption.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::count;
///
/// assert_eq!(count("hello".chars()), 5);
/// ```
pub fn count<I: IntoIterator>(seq: I) -> usize {
    seq.into_iter().count()
}

/// True iff no two elements compare equal. Consumes until the first
/// duplicate.
///
/// # Examples
///
/// ```rust
/// use pliers::seq::is_distinct;
///
/// assert!(is_distinct([1, 2, 3]));
/// assert!(!is_distinct("banana".chars()));
/// ```
pub fn is_distinct<I>(seq: I) -> bool
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut seen = Seen::default();
    seq.into_iter().all(|item| seen.insert(item))
}
