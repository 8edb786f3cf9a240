//! Operator shorthands as named functions.
//!
//! Rust has no user-defined infix operators, so each shorthand is a free
//! function taking its operands in the written order:
//!
//! | Shorthand | Function | Same as | Grouping |
//! |-----------|----------|---------|----------|
//! | `f <map> r` | [`fmap`] | `r.map(f)` | tight, left |
//! | `rf <apply> r` | [`ap`] | `r.apply(rf)` | tight, left |
//! | `r <then> f` | [`bind`] | `r.flat_map(f)` | loose, left |
//! | `f <then-flip> r` | [`bind_right`] | `r.flat_map(f)` | loose, right |
//!
//! `fmap` and `ap` bind tighter than the flat-map forms: an argument of
//! `bind` may itself be an `fmap`/`ap` expression, never the other way
//! round. Left-grouped pipelines read `bind(bind(r, f), g)` (or simply
//! `r.flat_map(f).flat_map(g)`); right-grouped ones read
//! `bind_right(f, bind_right(g, r))`, which [`compose`] packages up.
//!
//! ```
//! use outcome_core::ops::{ap, bind, fmap};
//! use outcome_core::{Outcome, pure};
//!
//! fn half(n: u32) -> Outcome<u32, &'static str> {
//!     if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::Failure("odd") }
//! }
//!
//! let add_one = |n: u32| n + 1;
//! assert_eq!(bind(fmap(add_one, pure(7)), half), Outcome::Success(4));
//! assert_eq!(ap(pure(add_one), bind(pure(3), half)), Outcome::Failure("odd"));
//! ```

use crate::outcome::Outcome;

/// `transform <map> outcome`.
#[inline]
pub fn fmap<V, U, E, F>(transform: F, outcome: Outcome<V, E>) -> Outcome<U, E>
where
    F: FnOnce(V) -> U,
{
    outcome.map(transform)
}

/// `transform <apply> outcome`. A failed `transform` wins over a failed
/// `outcome`.
#[inline]
pub fn ap<V, U, E, F>(transform: Outcome<F, E>, outcome: Outcome<V, E>) -> Outcome<U, E>
where
    F: FnOnce(V) -> U,
{
    outcome.apply(transform)
}

/// `outcome <then> transform`, grouped to the left.
#[inline]
pub fn bind<V, U, E, F>(outcome: Outcome<V, E>, transform: F) -> Outcome<U, E>
where
    F: FnOnce(V) -> Outcome<U, E>,
{
    outcome.flat_map(transform)
}

/// `transform <then-flip> outcome`, grouped to the right.
#[inline]
pub fn bind_right<V, U, E, F>(transform: F, outcome: Outcome<V, E>) -> Outcome<U, E>
where
    F: FnOnce(V) -> Outcome<U, E>,
{
    outcome.flat_map(transform)
}

/// Compose two fallible steps right to left: `inner` runs first, `outer`
/// only if `inner` succeeded.
///
/// ```
/// use outcome_core::ops::compose;
/// use outcome_core::Outcome;
///
/// let checked_sqrt = |x: f64| {
///     if x >= 0.0 { Outcome::Success(x.sqrt()) } else { Outcome::Failure("negative") }
/// };
/// let parse = |s: &str| -> Outcome<f64, &'static str> {
///     s.parse::<f64>().map_err(|_| "not a number").into()
/// };
///
/// let mut parse_then_sqrt = compose(checked_sqrt, parse);
/// assert_eq!(parse_then_sqrt("16"), Outcome::Success(4.0));
/// assert_eq!(parse_then_sqrt("-1"), Outcome::Failure("negative"));
/// assert_eq!(parse_then_sqrt("x"), Outcome::Failure("not a number"));
/// ```
#[inline]
pub fn compose<A, B, C, E, F, G>(mut outer: F, mut inner: G) -> impl FnMut(A) -> Outcome<C, E>
where
    F: FnMut(B) -> Outcome<C, E>,
    G: FnMut(A) -> Outcome<B, E>,
{
    move |input| bind_right(&mut outer, inner(input))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;
    use crate::outcome::pure;

    fn half(n: i32) -> Outcome<i32, String> {
        if n % 2 == 0 {
            Outcome::Success(n / 2)
        } else {
            Outcome::Failure(format!("{n} is odd"))
        }
    }

    #[test]
    fn test_fmap_matches_map() {
        let outcome: Outcome<i32, String> = pure(20);
        assert_eq!(fmap(|x| x + 1, outcome.clone()), outcome.map(|x| x + 1));
    }

    #[test]
    fn test_ap_failure_precedence() {
        let transform: Outcome<fn(i32) -> i32, &str> = Outcome::Failure("function");
        let value: Outcome<i32, &str> = Outcome::Failure("argument");
        assert_eq!(ap(transform, value), Outcome::Failure("function"));
    }

    #[test]
    fn test_ap_curried_two_arguments() {
        let add = |a: i32| move |b: i32| a + b;
        let partial = ap(pure::<_, String>(add), pure(2));
        assert_eq!(ap(partial, pure(40)), Outcome::Success(42));
    }

    #[test]
    fn test_bind_left_pipeline() {
        assert_eq!(bind(bind(pure(8), half), half), Outcome::Success(2));
        assert_eq!(
            bind(bind(pure(6), half), half),
            Outcome::Failure(String::from("3 is odd"))
        );
    }

    #[test]
    fn test_bind_right_grouping() {
        let left = bind(bind(pure(12), half), half);
        let right = bind_right(half, bind_right(half, pure(12)));
        assert_eq!(left, right);
    }

    #[test]
    fn test_bind_right_short_circuits() {
        let called = Cell::new(false);
        let failed: Outcome<i32, String> = Outcome::Failure(String::from("early"));
        let result = bind_right(
            |n| {
                called.set(true);
                half(n)
            },
            failed,
        );
        assert_eq!(result, Outcome::Failure(String::from("early")));
        assert!(!called.get());
    }

    #[test]
    fn test_compose_matches_nested_bind_right() {
        let mut quarter = compose(half, half);
        for n in [0, 4, 6, 7, 40] {
            assert_eq!(quarter(n), bind_right(half, bind_right(half, pure(n))));
        }
    }

    #[test]
    fn test_map_tier_inside_bind() {
        let result = bind(fmap(|x: i32| x * 2, pure(3)), half);
        assert_eq!(result, Outcome::Success(3));
    }
}
