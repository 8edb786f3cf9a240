//! The [`Outcome`] container and its combinators.
//!
//! An `Outcome` is the already-determined result of a fallible computation:
//! either a value or the failure that prevented one. Failures are carried as
//! data through [`map`](Outcome::map), [`flat_map`](Outcome::flat_map) and
//! [`apply`](Outcome::apply), and handed back to `?` propagation only by
//! [`unwrap`](Outcome::unwrap).

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;

/// Outcome of a computation that either produced a `V` or failed with an `E`.
///
/// # Examples
///
/// ```
/// use outcome_core::{Outcome, pure};
///
/// let length = pure::<_, outcome_core::Error>("Hello world!").map(str::len);
/// assert_eq!(length, Outcome::Success(12));
///
/// let parsed: Outcome<i32, std::num::ParseIntError> =
///     Outcome::from_unsafe(|| "forty-two".parse::<i32>());
/// assert!(parsed.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an Outcome may hold a failure that should be handled"]
pub enum Outcome<V, E = Error> {
    /// The computation produced a value.
    Success(V),
    /// The computation failed.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<V, E> Outcome<V, E> {
    /// Wrap a value as a success.
    #[inline]
    pub const fn success(value: V) -> Self {
        Success(value)
    }

    /// Wrap an error as a failure.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Wrap a value as a success. Never fails.
    #[inline]
    pub const fn pure(value: V) -> Self {
        Success(value)
    }

    /// Run `operation` once, right now, and record what it returned.
    ///
    /// No retry and no rollback: any side effects belong to `operation`.
    #[inline]
    pub fn from_unsafe<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        match operation() {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }

    /// Hand the outcome back to native `Result` propagation.
    ///
    /// # Errors
    ///
    /// Returns the captured failure unchanged if this is a [`Failure`].
    #[inline]
    pub fn unwrap(self) -> Result<V, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// The value, or `None` for a failure.
    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The error, or `None` for a success.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrow the payload, leaving `self` intact.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Transform the value of a success. A failure passes through untouched
    /// and `transform` is not called.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Success(value) => Success(transform(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Observe the value of a success. Does nothing for a failure.
    #[inline]
    pub fn for_each<F>(&self, side_effect: F)
    where
        F: FnOnce(&V),
    {
        match self {
            Success(value) => side_effect(value),
            Failure(_) => {}
        }
    }

    /// Chain a dependent fallible step.
    ///
    /// The first failure in a chain of `flat_map`s is the one that surfaces;
    /// later steps never run.
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Success(value) => transform(value),
            Failure(error) => Failure(error),
        }
    }

    /// Apply a possibly-failed function to this possibly-failed value.
    ///
    /// When both sides are failures, the failure of `transform` wins.
    #[inline]
    pub fn apply<U, F>(self, transform: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match (transform, self) {
            (Failure(error), _) | (Success(_), Failure(error)) => Failure(error),
            (Success(function), Success(value)) => Success(function(value)),
        }
    }

    /// Observe the error of a failure, returning the same outcome.
    #[inline]
    pub fn tap_failure<F>(self, observe: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(ref error) = self {
            observe(error);
        }
        self
    }

    /// Like [`value`](Self::value), but logs the failure before dropping it.
    #[inline]
    pub fn value_logged(self) -> Option<V>
    where
        E: fmt::Display,
    {
        match self {
            Success(value) => Some(value),
            Failure(error) => {
                tracing::error!("Operation failed: {}", error);
                None
            }
        }
    }
}

impl<V> Outcome<V, Error> {
    /// Run `operation` once and capture an unwinding panic as
    /// [`Error::Panicked`].
    ///
    /// Only unwinding panics are caught; with `panic = "abort"` the process
    /// still aborts. The global panic hook runs before the capture.
    #[inline]
    pub fn from_panicking<F>(operation: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Success(value),
            Err(payload) => {
                let message = panic_message(&*payload);
                tracing::warn!(%message, "captured panic from computation");
                Failure(Error::panicked(message))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("non-string panic payload"))
}

/// Wrap a value as a success.
#[inline]
pub const fn pure<V, E>(value: V) -> Outcome<V, E> {
    Success(value)
}

/// Adapt a `Result`-returning function into one returning [`Outcome`].
///
/// Each call of the returned function goes through
/// [`Outcome::from_unsafe`].
///
/// ```
/// use outcome_core::{Outcome, wrap};
///
/// let mut parse = wrap(|text: &str| text.parse::<u8>());
/// assert_eq!(parse("7"), Outcome::Success(7));
/// assert!(parse("700").is_failure());
/// ```
#[inline]
pub fn wrap<I, V, E, F>(mut function: F) -> impl FnMut(I) -> Outcome<V, E>
where
    F: FnMut(I) -> Result<V, E>,
{
    move |input| Outcome::from_unsafe(|| function(input))
}

/// Conversion from `std::result::Result` into [`Outcome`].
pub trait ResultExt<V, E> {
    /// `Ok` becomes [`Success`], `Err` becomes [`Failure`].
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> ResultExt<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from_unsafe(|| self)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        result.into_outcome()
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.unwrap()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({value})"),
            Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
