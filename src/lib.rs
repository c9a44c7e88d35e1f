//! # pliers
//!
//! Small, composable tools for transforming data: currying, function
//! composition, memoization, and lazy sequence combinators.
//!
//! ## Overview
//!
//! This library is an infrastructure layer other code links against to
//! express transformations declaratively. It provides:
//!
//! - **Callable substrate**: a dynamic callable abstraction with declared
//!   signatures ([`callable`])
//! - **Currying**: partial application with arity tracking ([`curry`])
//! - **Composition**: `compose!`, `pipe!`, `thread_first!`, `thread_last!`,
//!   `juxt!` and friends ([`compose`])
//! - **Memoization**: result caching keyed by arguments ([`memo`])
//! - **Lazy sequences**: single-pass iterator combinators ([`seq`])
//! - **Associative transforms**: non-mutating map operations ([`assoc`])
//!
//! ## Feature Flags
//!
//! - `callable`: dynamic callable substrate
//! - `curry`: the curry engine (implies `callable`)
//! - `compose`: composition macros and combinators (implies `curry`)
//! - `memoize`: the memoizer (implies `curry`)
//! - `seq`: lazy sequence combinators
//! - `assoc`: associative transforms
//! - `sync`: internally-locked memo cache for shared wrappers
//! - `fxhash`: faster internal hash maps and sets
//!
//! ## Example
//!
//! ```rust
//! use pliers::pipe;
//! use pliers::seq::{frequencies, unique};
//!
//! let words = ["pin", "pin", "nut", "bolt", "nut", "pin"];
//! let distinct: Vec<_> = unique(words).collect();
//! assert_eq!(distinct, ["pin", "nut", "bolt"]);
//!
//! let counts = frequencies(words);
//! assert_eq!(counts[&"pin"], 3);
//!
//! let shouted = pipe!("bolt", str::to_uppercase, |s: String| s + "!");
//! assert_eq!(shouted, "BOLT!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use pliers::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::Error;

    #[cfg(feature = "callable")]
    pub use crate::callable::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "memoize")]
    pub use crate::memo::*;

    // `seq::drop`/`seq::get` and `assoc::get` stay behind their module
    // paths: globbing them here would shadow `std::mem::drop` and clash
    // with each other.
    #[cfg(feature = "seq")]
    pub use crate::seq::{
        accumulate, accumulate_from, concat, cons, count, first, frequencies, group_by,
        interpose, is_distinct, iterate, last, nth, partition, partition_pad, reduce_by,
        reduce_by_init, remove, rest, second, take, take_nth, unique, unique_by,
    };

    #[cfg(feature = "assoc")]
    pub use crate::assoc::{
        assoc, dissoc, key_filter, keymap, merge, merge_with, val_filter, valmap,
    };
}

pub mod error;

#[cfg(feature = "callable")]
pub mod callable;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "memoize")]
pub mod memo;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "assoc")]
pub mod assoc;
