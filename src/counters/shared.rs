//! Reader/writer-locked shared counter.
//!
//! This module provides [`SharedCounter`], an integer counter that many
//! threads can read at once while increments are serialized behind a write
//! lock. Unlike a bare atomic, every increment returns the exact value its own
//! addition produced, and the lock can be waited on with a deadline.

use std::fmt::{self, Debug};
use std::time::Duration;

use crossbeam_utils::CachePadded;
use num_traits::{CheckedAdd, Signed, WrappingAdd};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::counters::{CounterInt, Observable};
use crate::error::{Error, Result};

/// A thread-safe integer counter guarded by a reader/writer lock.
///
/// Readers ([`get_value`](Self::get_value)) may run concurrently with each
/// other but never with a writer. Writers
/// ([`increment_and_get`](Self::increment_and_get) and friends) run one at a
/// time and read back their own result before releasing the lock, so the
/// returned value is exactly this call's addition applied to the full history
/// of earlier writes.
///
/// The lock is released by RAII guards on every exit path, and
/// `parking_lot` locks do not poison, so a panicking caller never wedges the
/// counter for others.
///
/// # Construction
///
/// Only the initial value is validated: it must not be negative. After
/// construction, negative summands are accepted and may take the value below
/// zero.
///
/// # Overflow
///
/// The default increment path wraps around on overflow, like the native
/// machine integers it is built on. Use
/// [`checked_increment_and_get_by`](Self::checked_increment_and_get_by) to
/// detect overflow instead.
///
/// # Examples
///
/// Basic usage:
///
/// ```rust
/// use rwcounter::counters::shared::SharedCounter;
///
/// let counter: SharedCounter = SharedCounter::new();
/// assert_eq!(counter.increment_and_get(), 1);
/// assert_eq!(counter.increment_and_get_by(5), 6);
/// assert_eq!(counter.get_value(), 6);
/// ```
///
/// Sharing across threads:
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use rwcounter::counters::shared::SharedCounter;
///
/// let counter = Arc::new(SharedCounter::<i64>::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let counter = Arc::clone(&counter);
///         thread::spawn(move || {
///             for _ in 0..100 {
///                 counter.increment_and_get();
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(counter.get_value(), 400);
/// ```
pub struct SharedCounter<T = isize> {
    name: &'static str,
    value: CachePadded<RwLock<T>>,
}

impl<T: CounterInt> SharedCounter<T> {
    /// Creates a new counter initialized to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwcounter::counters::shared::SharedCounter;
    ///
    /// let counter = SharedCounter::<i32>::new();
    /// assert_eq!(counter.get_value(), 0);
    /// ```
    pub fn new() -> Self {
        Self::from_value(T::zero())
    }

    /// Creates a new counter initialized to `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `initial` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwcounter::counters::shared::SharedCounter;
    ///
    /// let counter = SharedCounter::<i32>::with_value(5).unwrap();
    /// assert_eq!(counter.get_value(), 5);
    ///
    /// assert!(SharedCounter::<i32>::with_value(-1).is_err());
    /// ```
    pub fn with_value(initial: T) -> Result<Self> {
        if Signed::is_negative(&initial) {
            debug!(%initial, "rejected counter with negative initial value");
            return Err(Error::InvalidArgument {
                value: initial.widen(),
            });
        }
        Ok(Self::from_value(initial))
    }

    fn from_value(value: T) -> Self {
        SharedCounter {
            name: "",
            value: CachePadded::new(RwLock::new(value)),
        }
    }

    /// Sets the name of this counter, returning `self` for method chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwcounter::counters::shared::SharedCounter;
    /// use rwcounter::counters::Observable;
    ///
    /// let counter = SharedCounter::<i32>::new().with_name("jobs_done");
    /// assert_eq!(counter.name(), "jobs_done");
    /// ```
    pub fn with_name(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Adds one to the counter and returns the new value.
    #[inline]
    pub fn increment_and_get(&self) -> T {
        self.increment_and_get_by(T::one())
    }

    /// Adds `summand` (which may be negative) and returns the new value.
    ///
    /// The addition wraps around on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwcounter::counters::shared::SharedCounter;
    ///
    /// let counter = SharedCounter::<i32>::new();
    /// assert_eq!(counter.increment_and_get_by(5), 5);
    /// assert_eq!(counter.increment_and_get_by(5), 10);
    /// assert_eq!(counter.increment_and_get_by(-12), -2);
    /// ```
    #[inline]
    pub fn increment_and_get_by(&self, summand: T) -> T {
        let mut value = self.value.write();
        *value = WrappingAdd::wrapping_add(&*value, &summand);
        *value
    }

    /// Adds `summand` unless doing so would overflow.
    ///
    /// Returns the new value, or `None` if the addition overflowed, in which
    /// case the counter is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwcounter::counters::shared::SharedCounter;
    ///
    /// let counter = SharedCounter::<i8>::with_value(120).unwrap();
    /// assert_eq!(counter.checked_increment_and_get_by(7), Some(127));
    /// assert_eq!(counter.checked_increment_and_get_by(1), None);
    /// assert_eq!(counter.get_value(), 127);
    /// ```
    pub fn checked_increment_and_get_by(&self, summand: T) -> Option<T> {
        let mut value = self.value.write();
        let next = CheckedAdd::checked_add(&*value, &summand)?;
        *value = next;
        Some(next)
    }

    /// Returns the current value.
    ///
    /// Blocks only while a writer holds the lock; concurrent readers do not
    /// block each other.
    #[inline]
    pub fn get_value(&self) -> T {
        *self.value.read()
    }

    /// Like [`increment_and_get_by`](Self::increment_and_get_by), but gives up
    /// and returns `None` if the write lock cannot be acquired within
    /// `timeout`.
    pub fn try_increment_and_get_for(&self, summand: T, timeout: Duration) -> Option<T> {
        let Some(mut value) = self.value.try_write_for(timeout) else {
            trace!(counter = self.name, ?timeout, "timed out waiting for write lock");
            return None;
        };
        *value = WrappingAdd::wrapping_add(&*value, &summand);
        Some(*value)
    }

    /// Like [`get_value`](Self::get_value), but gives up and returns `None` if
    /// the read lock cannot be acquired within `timeout`.
    pub fn try_get_value_for(&self, timeout: Duration) -> Option<T> {
        match self.value.try_read_for(timeout) {
            Some(value) => Some(*value),
            None => {
                trace!(counter = self.name, ?timeout, "timed out waiting for read lock");
                None
            }
        }
    }
}

impl<T: CounterInt> Observable for SharedCounter<T> {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn value(&self) -> i64 {
        self.get_value().widen()
    }
}

impl<T: CounterInt> Default for SharedCounter<T> {
    /// Creates a new counter initialized to zero with no name.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CounterInt> Debug for SharedCounter<T> {
    /// Formats the counter as `name{ value }`.
    ///
    /// Does not block: prints `<locked>` while a writer holds the lock.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.try_read() {
            Some(value) => write!(f, "{}{{ {} }}", self.name, *value),
            None => write!(f, "{}{{ <locked> }}", self.name),
        }
    }
}
