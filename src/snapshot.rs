//! Snapshot types for serializing counter state.
//!
//! # Feature Flag
//!
//! This module requires the `serde` feature:
//!
//! ```toml
//! [dependencies]
//! rwcounter = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rwcounter::counters::Observable;
//! use rwcounter::counters::shared::SharedCounter;
//! use rwcounter::snapshot::CounterSnapshot;
//!
//! let counter: SharedCounter = SharedCounter::new().with_name("requests");
//! counter.increment_and_get_by(42);
//!
//! let snapshot = CounterSnapshot::from_observable(&counter);
//! let json = serde_json::to_string(&snapshot)?;
//! assert_eq!(json, r#"{"name":"requests","value":42}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::counters::Observable;
use serde::{Deserialize, Serialize};

/// Name exported for counters that were never given one.
pub const UNNAMED: &str = "(unnamed)";

/// A snapshot of a single counter's state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// The name of the counter.
    pub name: String,
    /// The value of the counter.
    pub value: i64,
}

impl CounterSnapshot {
    /// Creates a new counter snapshot.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Captures the current value of an observable counter.
    ///
    /// Unnamed counters are exported as `"(unnamed)"`.
    pub fn from_observable(counter: &dyn Observable) -> Self {
        let name = match counter.name() {
            "" => UNNAMED,
            name => name,
        };
        Self::new(name, counter.value())
    }
}

/// A point-in-time capture of a set of counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Optional timestamp in milliseconds since Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// The counter snapshots.
    pub counters: Vec<CounterSnapshot>,
}

impl MetricsSnapshot {
    /// Creates a new metrics snapshot with the given counters.
    pub fn new(counters: Vec<CounterSnapshot>) -> Self {
        Self {
            timestamp_ms: None,
            counters,
        }
    }

    /// Creates a new metrics snapshot with counters and a timestamp.
    pub fn with_timestamp(counters: Vec<CounterSnapshot>, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms: Some(timestamp_ms),
            counters,
        }
    }

    /// Finds a counter by name.
    pub fn get(&self, name: &str) -> Option<&CounterSnapshot> {
        self.counters.iter().find(|c| c.name == name)
    }

    /// Collects snapshots from an iterator of observable counters.
    pub fn collect<'a>(counters: impl Iterator<Item = &'a dyn Observable>) -> Self {
        Self::new(counters.map(CounterSnapshot::from_observable).collect())
    }
}
