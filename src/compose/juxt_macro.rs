//! The `juxt!` macro: apply several functions to one input.

/// Builds a closure that applies every listed function to the same input
/// and returns the tuple of results, in listing order.
///
/// The input is cloned once per function, so each function may consume
/// its copy. A single-function `juxt!` yields a one-element tuple, keeping
/// the shape uniform.
///
/// # Examples
///
/// ```rust
/// use pliers::juxt;
///
/// let bounds = juxt!(
///     |v: Vec<i32>| v.into_iter().min(),
///     |v: Vec<i32>| v.into_iter().max(),
/// );
///
/// let (low, high) = bounds(vec![3, 1, 4, 1, 5]);
/// assert_eq!((low, high), (Some(1), Some(5)));
/// ```
#[macro_export]
macro_rules! juxt {
    ($($function:expr),+ $(,)?) => {
        move |input| ($(($function)(::core::clone::Clone::clone(&input))),+ ,)
    };
}
