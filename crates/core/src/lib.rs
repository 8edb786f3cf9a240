//! Composable success/failure container.
//!
//! [`Outcome<V, E>`] holds either the value a computation produced or the
//! failure that stopped it. Failures travel as data through the combinators
//! and come back out as a `std::result::Result` only when
//! [`Outcome::unwrap`] is called.
//!
//! - **Construction**: [`Outcome::from_unsafe`], [`Outcome::from_panicking`],
//!   [`pure`], [`wrap`]
//! - **Unwrapping**: [`Outcome::unwrap`], [`Outcome::value`],
//!   [`Outcome::error`]
//! - **Combinators**: [`Outcome::map`], [`Outcome::flat_map`],
//!   [`Outcome::apply`], [`Outcome::for_each`]
//! - **Operator shorthands**: see [`ops`]
//!
//! # Example
//!
//! ```
//! use outcome_core::prelude::*;
//!
//! fn unsafely_get_string() -> Result<String, Error> {
//!     Ok(String::from("Hello world!"))
//! }
//!
//! let greeting = Outcome::from_unsafe(unsafely_get_string);
//! greeting.for_each(|text| println!("{text}"));
//!
//! let length = greeting.map(|text| text.chars().count());
//! assert_eq!(length.to_string(), "Success(12)");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`Error`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod ops;
pub mod outcome;

pub use error::Error;
pub use outcome::{Outcome, ResultExt, pure, wrap};

/// Common imports.
///
/// ```
/// use outcome_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::ops::{ap, bind, bind_right, compose, fmap};
    pub use crate::outcome::{Outcome, ResultExt, pure, wrap};
}
