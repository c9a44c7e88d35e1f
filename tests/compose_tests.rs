//! Integration tests for the composition layer.

#![cfg(feature = "compose")]

use pliers::callable::{from_fn1, from_fn2, Args, Callable};
use pliers::compose::{complement, constant, flip, identity, tap, Composed};
use pliers::{compose, juxt, pipe, thread_first, thread_last};
use std::rc::Rc;

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

// =============================================================================
// Macro layer
// =============================================================================

#[test]
fn test_compose_last_listed_applied_first() {
    let composed = compose!(add_one, double);
    assert_eq!(composed(5), 11);

    let reversed = compose!(double, add_one);
    assert_eq!(reversed(5), 12);
}

#[test]
fn test_compose_changes_types_between_stages() {
    let described = compose!(
        |length: usize| format!("{length} chars"),
        |text: String| text.len(),
        |n: i32| n.to_string(),
    );
    assert_eq!(described(31415), "5 chars");
}

#[test]
fn test_pipe_mirrors_compose() {
    assert_eq!(pipe!(5, double, add_one), compose!(add_one, double)(5));
}

#[test]
fn test_pipe_immediate_value() {
    let total = pipe!(
        vec![4, 1, 3],
        |mut v: Vec<i32>| {
            v.sort_unstable();
            v
        },
        |v: Vec<i32>| v.into_iter().sum::<i32>(),
    );
    assert_eq!(total, 8);
}

#[test]
fn test_thread_first_and_last_disagree_on_position() {
    fn divide(a: f64, b: f64) -> f64 {
        a / b
    }

    let first = thread_first!(10.0, (divide, 2.0)); // divide(10, 2)
    let last = thread_last!(10.0, (divide, 2.0)); // divide(2, 10)
    assert!((first - 5.0).abs() < f64::EPSILON);
    assert!((last - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_juxt_fans_out_in_listing_order() {
    let stats = juxt!(
        |v: Vec<i32>| v.len(),
        |v: Vec<i32>| v.into_iter().sum::<i32>(),
    );
    assert_eq!(stats(vec![1, 2, 3]), (3, 6));
}

// =============================================================================
// Combinators
// =============================================================================

#[test]
fn test_identity_and_constant() {
    assert_eq!(identity(9), 9);
    let nine = constant::<i32, i32>(9);
    assert_eq!(nine(1), 9);
    assert_eq!(nine(100), 9);
}

#[test]
fn test_complement_in_filter_position() {
    let non_empty: Vec<&str> = ["", "a", "", "b"]
        .into_iter()
        .filter(complement(|s: &&str| s.is_empty()))
        .collect();
    assert_eq!(non_empty, ["a", "b"]);
}

#[test]
fn test_flip_argument_order() {
    let append = |base: String, suffix: &str| base + suffix;
    let prepend_style = flip(append);
    assert_eq!(prepend_style("!", "wow".to_string()), "wow!");
}

#[test]
fn test_tap_observes_without_changing() {
    let mut seen = Vec::new();
    let result = pipe!(
        3,
        double,
        |x: i32| tap(|v: &i32| seen.push(*v), x),
        add_one,
    );
    assert_eq!(result, 7);
    assert_eq!(seen, [6]);
}

// =============================================================================
// Dynamic layer
// =============================================================================

#[test]
fn test_composed_matches_macro_composition() {
    let dynamic = Composed::of(from_fn1(double)).then_outer(from_fn1(add_one));
    let inline = compose!(add_one, double);

    for n in [-3, 0, 7] {
        assert_eq!(dynamic.invoke(Args::positional([n])).unwrap(), inline(n));
    }
}

#[test]
fn test_composed_innermost_multiarg() {
    let chain = Composed::of(from_fn2(|a: i32, b: i32| a - b))
        .then_outer(from_fn1(i32::abs));
    assert_eq!(chain.invoke(Args::positional([3, 10])).unwrap(), 7);
}

#[test]
fn test_composed_from_collected_stages() {
    let stages: Vec<Rc<dyn Callable<i32, i32>>> = vec![
        Rc::new(from_fn1(add_one)),
        Rc::new(from_fn1(double)),
        Rc::new(from_fn1(|n: i32| n - 3)),
    ];
    // add_one(double(n - 3))
    let chain = Composed::new(stages);
    assert_eq!(chain.invoke(Args::positional([10])).unwrap(), 15);
}

#[test]
fn test_composed_is_cloneable_and_reusable() {
    let chain = Composed::of(from_fn1(add_one));
    let copy = chain.clone();
    assert_eq!(chain.invoke(Args::positional([1])).unwrap(), 2);
    assert_eq!(copy.invoke(Args::positional([1])).unwrap(), 2);
}

#[test]
fn test_error_propagates_through_stages() {
    use pliers::callable::RawFn;
    use pliers::error::Error;

    let failing = RawFn::new(|_: Args<i32>| -> Result<i32, Error> {
        Err(Error::UnhashableArguments)
    });
    let chain = Composed::of(failing).then_outer(from_fn1(add_one));
    assert_eq!(
        chain.invoke(Args::positional([1])).unwrap_err(),
        Error::UnhashableArguments
    );
}
