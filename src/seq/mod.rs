//! Lazy sequence combinators.
//!
//! Single-pass, order-preserving transformations over anything iterable.
//! Lazy operations return iterator adapters that pull from their source on
//! demand — unbounded sources are fine as long as the consumer is also
//! bounded ([`take`], [`first`], ...). Eager operations ([`group_by`],
//! [`frequencies`], [`count`], ...) consume their input fully and say so.
//!
//! Restartability is a property of the *source*, not of the adapter: a
//! `Vec` can be iterated again, a spent socket cannot. Every adapter here
//! consumes its input in one forward pass and never rewinds.
//!
//! # Examples
//!
//! ```rust
//! use pliers::seq::{interpose, iterate, take, unique};
//!
//! // 1, 2, 4, 8, ... is infinite; take makes it finite.
//! let powers: Vec<u64> = take(4, iterate(|n: &u64| n * 2, 1)).collect();
//! assert_eq!(powers, [1, 2, 4, 8]);
//!
//! let firsts: Vec<_> = unique([3, 1, 3, 2, 1]).collect();
//! assert_eq!(firsts, [3, 1, 2]);
//!
//! let spaced: Vec<_> = interpose(0, [1, 2, 3]).collect();
//! assert_eq!(spaced, [1, 0, 2, 0, 3]);
//! ```

mod access;
mod group;
mod lazy;
pub mod probe;

pub use access::{count, first, get, get_or, is_distinct, last, nth, second};
pub use group::{frequencies, group_by, reduce_by, reduce_by_init};
pub use lazy::{
    accumulate, accumulate_from, concat, cons, drop, interpose, iterate, partition,
    partition_pad, remove, rest, take, take_nth, unique, unique_by, Accumulate, Interpose,
    Iterate, Partition, PartitionPad, Remove, TakeNth, UniqueBy,
};

// The sequence macros are exported at the crate root.
pub use crate::{concatv, is_iterable};

#[cfg(feature = "fxhash")]
pub(crate) type Seen<T> = rustc_hash::FxHashSet<T>;
#[cfg(not(feature = "fxhash"))]
pub(crate) type Seen<T> = std::collections::HashSet<T>;
