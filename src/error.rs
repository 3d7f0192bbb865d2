//! Crate-wide error type.
//!
//! Only two operations in this crate can fail: constructing a
//! [`SharedCounter`](crate::counters::shared::SharedCounter) with a negative
//! initial value, and parsing a [`Money`](crate::reducers::money::Money)
//! amount. Everything else is total.
//!
//! # Example
//!
//! ```rust
//! use rwcounter::counters::shared::SharedCounter;
//! use rwcounter::Error;
//!
//! let err = SharedCounter::<i32>::with_value(-1).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { value: -1 }));
//! ```

use thiserror::Error;

/// Unified error type for all fallible operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A counter was constructed with a negative initial value.
    #[error("counter must be a natural number, got {value}")]
    InvalidArgument {
        /// The rejected initial value, widened to `i64`.
        value: i64,
    },

    /// A monetary amount could not be parsed as a decimal.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),

    /// Error from the JSON observer.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
