//! # rwcounter - Reader/Writer-Locked Shared Counters
//!
//! A small Rust library built around one concurrency primitive, the
//! [`SharedCounter`](counters::shared::SharedCounter): an integer guarded by a
//! reader/writer lock. Any number of threads may read it at once, while
//! increments are serialized and each one returns the exact value its own
//! addition produced.
//!
//! ## Why not an atomic?
//!
//! A bare `AtomicIsize` is faster, but it cannot wait with a deadline and
//! offers no hook for the exporters in [`observers`]. `SharedCounter` trades some
//! raw throughput for:
//!
//! 1. **Serialized read-modify-write**: `increment_and_get_by` returns the
//!    post-increment value computed inside the critical section.
//! 2. **Concurrent reads**: readers share the lock and only wait for writers.
//! 3. **Bounded waits**: `try_increment_and_get_for` and `try_get_value_for`
//!    give up after a timeout.
//! 4. **No poisoning**: the lock comes from `parking_lot`, so a panicking
//!    holder never wedges the counter.
//!
//! The lock is wrapped in [`crossbeam_utils::CachePadded`] so that counters
//! stored next to each other do not false-share a cache line.
//!
//! ## Quick Start
//!
//! ```rust
//! use rwcounter::counters::shared::SharedCounter;
//!
//! let counter: SharedCounter = SharedCounter::with_value(10)?;
//! assert_eq!(counter.increment_and_get(), 11);
//! assert_eq!(counter.increment_and_get_by(-20), -9);
//! assert_eq!(counter.get_value(), -9);
//!
//! // Only the initial value is validated.
//! assert!(SharedCounter::<i32>::with_value(-1).is_err());
//! # Ok::<(), rwcounter::Error>(())
//! ```
//!
//! ## Reducers
//!
//! The [`reducers`] module holds stateless folds over
//! [`rust_decimal::Decimal`] values, independent of the counter:
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`max_by_currency`](reducers::money::max_by_currency) | Largest amount per currency |
//! | [`sum_by_currency`](reducers::money::sum_by_currency) | Total amount per currency |
//! | [`average`](reducers::average::average) | Average of a decimal sequence, `None` if empty |
//!
//! ## Observers
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `serde` | `snapshot` | Serializable counter snapshots |
//! | `json` | `observers::json` | Render counters as JSON |
//! | `full` | All observers | Enables all observer modules |

pub mod counters;
pub mod error;
pub mod observers;
pub mod reducers;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use error::{Error, Result};
