//! String length example
//!
//! This example demonstrates:
//! - Capturing a fallible computation with `Outcome::from_unsafe`
//! - Observing the value with `for_each`
//! - Transforming it with `map`
//! - Rejoining `?` propagation with `unwrap`
//!
//! # Run
//!
//! ```sh
//! RUST_LOG=debug cargo run -p outcome-core --example string_length
//! ```

use outcome_core::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn unsafely_get_string() -> Result<String, Error> {
    Ok(String::from("Hello world!"))
}

fn show(text: &str) {
    println!("{text}");
}

/// Main entry point.
fn main() -> Result<(), Error> {
    init_tracing();

    let result = Outcome::from_unsafe(unsafely_get_string);
    result.for_each(|text| show(text));

    let length = result.map(|text| text.chars().count());
    debug!(%length, "measured greeting");
    println!("{length}");

    let count = length.unwrap()?;
    info!(count, "string length example complete");
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
