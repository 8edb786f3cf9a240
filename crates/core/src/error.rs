//! Default failure payload for [`Outcome`](crate::Outcome).
//!
//! Any type can sit in the failure slot. This one exists so callers without a
//! domain error of their own still get something that describes what went
//! wrong.

use thiserror::Error;

/// Failure captured from a computation.
///
/// The variants record how the failure was captured, not what kind of
/// failure it is. Classification belongs to the caller's own payload type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// The computation returned an error.
    #[error("computation failed: {reason}")]
    Failed { reason: String },

    /// The computation panicked and the unwind was caught.
    #[error("computation panicked: {message}")]
    Panicked { message: String },
}

impl Error {
    /// Create a failure with the given reason.
    #[inline]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Create a failure from a caught panic message.
    #[inline]
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// The text describing the failure, without the variant prefix.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Failed { reason } => reason,
            Self::Panicked { message } => message,
        }
    }
}

impl From<String> for Error {
    #[inline]
    fn from(reason: String) -> Self {
        Self::failed(reason)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(reason: &str) -> Self {
        Self::failed(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display() {
        let error = Error::failed("disk on fire");
        assert_eq!(error.to_string(), "computation failed: disk on fire");
    }

    #[test]
    fn test_panicked_display() {
        let error = Error::panicked("index out of bounds");
        assert_eq!(
            error.to_string(),
            "computation panicked: index out of bounds"
        );
    }

    #[test]
    fn test_reason_strips_prefix() {
        assert_eq!(Error::failed("empty input").reason(), "empty input");
        assert_eq!(Error::panicked("boom").reason(), "boom");
    }

    #[test]
    fn test_string_conversions() {
        assert_eq!(Error::from("nope"), Error::failed("nope"));
        assert_eq!(Error::from(String::from("nope")), Error::failed("nope"));
    }

    #[test]
    fn test_is_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::failed("x"));
        assert_eq!(boxed.to_string(), "computation failed: x");
    }
}
