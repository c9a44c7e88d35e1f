//! Function composition and pipelining.
//!
//! Two levels live here:
//!
//! - **Macro layer** for fully typed pipelines: [`compose!`] (right-to-left),
//!   [`pipe!`] (left-to-right), [`thread_first!`] / [`thread_last!`]
//!   (threading a value through steps with extra arguments), and [`juxt!`]
//!   (fan-out to a tuple of results). Types flow freely between stages.
//! - **Dynamic layer**: [`Composed`], a right-to-left chain over
//!   [`Callable`](crate::callable::Callable) values, itself a callable — so
//!   a composition can be curried and memoized like anything else.
//!
//! Plus the small combinators everything else leans on: [`identity`],
//! [`constant`], [`flip`], [`complement`], and [`tap`].
//!
//! # Composition order
//!
//! `compose!` is right-to-left: the **last** listed function is applied
//! first to the raw input, and the **first** listed produces the final
//! result. `pipe!` is its mirror, reading left-to-right.
//!
//! ```rust
//! use pliers::{compose, pipe};
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);          // add_one(double(5))
//! assert_eq!(pipe!(5, double, add_one), 11); // same flow, spelled forwards
//! ```

mod combinators;
mod compose_macro;
mod dynamic;
mod juxt_macro;
mod pipe_macro;
mod thread_macro;

pub use combinators::{complement, constant, flip, identity, tap};
pub use dynamic::Composed;

// Macros are exported at the crate root; re-export them here so
// `compose::*` brings the whole layer in.
pub use crate::{compose, juxt, pipe, thread_first, thread_last};
