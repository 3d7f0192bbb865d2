//! Observer implementations for exporting counter values.
//!
//! - [`json`] - Serialize counters to JSON format
//!
//! # Feature Flags
//!
//! - `json` - Enables the [`json`] module
//! - `full` - Enables all observer modules
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # fn main() -> rwcounter::Result<()> {
//! use rwcounter::counters::Observable;
//! use rwcounter::counters::shared::SharedCounter;
//! use rwcounter::observers::json::JsonObserver;
//!
//! let requests: SharedCounter = SharedCounter::new().with_name("requests");
//! let errors: SharedCounter = SharedCounter::new().with_name("errors");
//! requests.increment_and_get();
//!
//! let counters: [&dyn Observable; 2] = [&requests, &errors];
//! let json = JsonObserver::new().to_json(counters.into_iter())?;
//! assert_eq!(
//!     json,
//!     r#"[{"name":"requests","value":1},{"name":"errors","value":0}]"#
//! );
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json"))]
//! # fn main() {}
//! ```

#[cfg(feature = "json")]
pub mod json;
