//! JSON observer for serializing counters.
//!
//! This module provides [`JsonObserver`], which renders a collection of
//! [`Observable`] counters as JSON using the [`snapshot`](crate::snapshot)
//! types.
//!
//! # Feature Flag
//!
//! This module requires the `json` feature:
//!
//! ```toml
//! [dependencies]
//! rwcounter = { version = "0.1", features = ["json"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rwcounter::counters::Observable;
//! use rwcounter::counters::shared::SharedCounter;
//! use rwcounter::observers::json::JsonObserver;
//!
//! let jobs: SharedCounter = SharedCounter::new().with_name("jobs");
//! jobs.increment_and_get_by(3);
//!
//! let counters: Vec<&dyn Observable> = vec![&jobs];
//! let json = JsonObserver::new().to_json(counters.into_iter())?;
//! assert_eq!(json, r#"[{"name":"jobs","value":3}]"#);
//! # Ok::<(), rwcounter::Error>(())
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::counters::Observable;
use crate::error::Result;
use crate::snapshot::{CounterSnapshot, MetricsSnapshot};

/// Configuration for the JSON observer.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Whether to pretty-print the JSON output.
    pub pretty: bool,
    /// Whether to include a timestamp in the output.
    pub include_timestamp: bool,
    /// Whether to wrap counters in a [`MetricsSnapshot`] object.
    pub wrap_in_snapshot: bool,
}

/// An observer that serializes counters to JSON format.
///
/// By default the output is a compact array of `{"name", "value"}` objects.
#[derive(Debug, Clone, Default)]
pub struct JsonObserver {
    config: JsonConfig,
}

impl JsonObserver {
    /// Creates a new JSON observer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new JSON observer with the specified configuration.
    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Enables or disables pretty-printing.
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.config.pretty = enabled;
        self
    }

    /// Enables or disables timestamp inclusion.
    ///
    /// Only has effect when `wrap_in_snapshot` is also enabled.
    pub fn include_timestamp(mut self, enabled: bool) -> Self {
        self.config.include_timestamp = enabled;
        self
    }

    /// Enables or disables wrapping the output in a [`MetricsSnapshot`].
    pub fn wrap_in_snapshot(mut self, enabled: bool) -> Self {
        self.config.wrap_in_snapshot = enabled;
        self
    }

    /// Collects counters into a vector of [`CounterSnapshot`].
    pub fn collect<'a>(
        &self,
        counters: impl Iterator<Item = &'a dyn Observable>,
    ) -> Vec<CounterSnapshot> {
        counters.map(CounterSnapshot::from_observable).collect()
    }

    /// Serializes counters to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json<'a>(&self, counters: impl Iterator<Item = &'a dyn Observable>) -> Result<String> {
        let snapshots = self.collect(counters);

        if self.config.wrap_in_snapshot {
            let snapshot = if self.config.include_timestamp {
                MetricsSnapshot::with_timestamp(snapshots, current_timestamp_ms())
            } else {
                MetricsSnapshot::new(snapshots)
            };
            self.render(&snapshot)
        } else {
            self.render(&snapshots)
        }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

/// Returns the current timestamp in milliseconds since Unix epoch.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
