//! The `compose!` macro: right-to-left function composition.

/// Composes functions right-to-left.
///
/// `compose!(f, g, h)` builds `|x| f(g(h(x)))`: the last listed function
/// is applied first to the raw input, each preceding function receives the
/// prior result, and the first listed produces the final value.
///
/// The result is a plain closure, so it can be stored, passed along, or
/// lifted into the dynamic layer via
/// [`RawFn`](crate::callable::RawFn) when it needs currying or memoizing.
///
/// # Examples
///
/// ```rust
/// use pliers::compose;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Types may change between stages:
///
/// ```rust
/// use pliers::compose;
///
/// let length_of_display = compose!(|s: String| s.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_display(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => { $only };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        move |input| ($outer)($crate::compose!($($inner),+)(input))
    };
}
