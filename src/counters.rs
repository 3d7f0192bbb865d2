//! Core module containing the counter implementation and shared infrastructure.
//!
//! The only counter type is [`SharedCounter`](shared::SharedCounter), a single
//! integer guarded by a reader/writer lock:
//!
//! ```text
//!                          ┌─────────────────────────────────────┐
//!   Reader 0 ──read────►   │                                     │
//!   Reader 1 ──read────►   │   CachePadded<RwLock<value: T>>     │
//!   Writer 0 ──write───►   │                                     │
//!                          └─────────────────────────────────────┘
//!
//!   many readers at once, or exactly one writer, never both
//! ```
//!
//! The integer width is chosen through the sealed [`CounterInt`] trait, which
//! is implemented for every signed primitive integer that widens losslessly
//! into `i64`.

pub mod shared;

use num_traits::{PrimInt, Signed, WrappingAdd};
use std::fmt::{Debug, Display};

mod sealed {
    /// Prevents downstream crates from implementing [`CounterInt`](super::CounterInt).
    pub trait Sealed {}
}

/// Signed primitive integer usable as the value of a [`SharedCounter`](shared::SharedCounter).
///
/// Implemented for `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait CounterInt:
    sealed::Sealed + PrimInt + Signed + WrappingAdd + Debug + Display + Send + Sync + 'static
{
    /// Widens the value into an `i64` for observers.
    fn widen(self) -> i64;
}

macro_rules! impl_counter_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl CounterInt for $t {
                #[inline]
                fn widen(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_counter_int!(i8, i16, i32, i64, isize);

/// A trait for types that can be observed to retrieve their current value.
///
/// Exporters (the JSON observer and the serde snapshot types) only depend on
/// this trait, so they work with a heterogeneous list of counters of
/// different integer widths.
///
/// # Examples
///
/// ```rust
/// use rwcounter::counters::shared::SharedCounter;
/// use rwcounter::counters::Observable;
///
/// let counter: SharedCounter<i32> = SharedCounter::new().with_name("requests");
/// counter.increment_and_get_by(5);
///
/// assert_eq!(counter.name(), "requests");
/// assert_eq!(counter.value(), 5);
/// ```
pub trait Observable: Debug {
    /// Returns the name of this counter, or an empty string if none was set.
    fn name(&self) -> &str;

    /// Returns the current value of the counter widened to `i64`.
    fn value(&self) -> i64;
}

impl Display for dyn Observable + '_ {
    /// Formats the counter as `name:value` if named, or just `value` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.name().is_empty() {
            write!(f, "{}:{}", self.name(), self.value())
        } else {
            write!(f, "{}", self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        assert_eq!((-3i8).widen(), -3);
        assert_eq!(i16::MAX.widen(), i16::MAX as i64);
        assert_eq!(i32::MIN.widen(), i32::MIN as i64);
        assert_eq!(i64::MAX.widen(), i64::MAX);
        assert_eq!(42isize.widen(), 42);
    }
}
