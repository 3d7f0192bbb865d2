//! Averaging over sequences of arbitrary-precision decimals.
//!
//! [`DecimalAverager`] accumulates a running sum and count, and can merge with
//! another partial averager so a sequence may be reduced in independent
//! chunks. [`average`] is the one-shot form over any iterator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Unit moved between the running sum and the carry: 10^28.
const CARRY_UNIT: Decimal = Decimal::from_parts(0x1000_0000, 0x3E25_0261, 0x204F_CE5E, false, 0);

/// Running sum and count of observed decimals.
///
/// The sum never overflows: whenever adding a value would leave the
/// [`Decimal`] range, whole multiples of 10^28 are moved out of the running
/// sum into an integer carry. The average of any sequence whose mean fits in
/// a `Decimal` is therefore defined, e.g. `[Decimal::MAX, Decimal::MAX]`
/// averages to `Decimal::MAX`.
///
/// The average is rounded toward positive infinity and keeps the largest
/// scale among the observed values, so `3.50`, `4.00` and `7.50` average to
/// `5.00` rather than `5`.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use rwcounter::reducers::average::DecimalAverager;
///
/// let mut avg = DecimalAverager::new();
/// assert_eq!(avg.average(), None);
///
/// avg.observe(Decimal::from(2));
/// avg.observe(Decimal::from(4));
/// assert_eq!(avg.count(), 2);
/// assert_eq!(avg.average(), Some(Decimal::from(3)));
/// ```
///
/// Reducing in chunks:
///
/// ```rust
/// use rust_decimal::Decimal;
/// use rwcounter::reducers::average::DecimalAverager;
///
/// let left: DecimalAverager = [1, 2].into_iter().map(Decimal::from).collect();
/// let right: DecimalAverager = [3, 6].into_iter().map(Decimal::from).collect();
///
/// assert_eq!(left.merge(right).average(), Some(Decimal::from(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecimalAverager {
    sum: Decimal,
    carry: i64,
    count: usize,
    scale: u32,
}

impl DecimalAverager {
    /// An averager that has observed nothing.
    pub const EMPTY: Self = Self {
        sum: Decimal::ZERO,
        carry: 0,
        count: 0,
        scale: 0,
    };

    /// Creates an empty averager.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds one value.
    #[inline]
    pub fn observe(&mut self, value: Decimal) {
        self.accumulate(value);
        self.count += 1;
        self.scale = self.scale.max(value.scale());
    }

    /// Combines two partial averagers into one covering both inputs.
    pub fn merge(mut self, other: Self) -> Self {
        self.carry += other.carry;
        self.accumulate(other.sum);
        self.count += other.count;
        self.scale = self.scale.max(other.scale);
        self
    }

    // Adding to the running sum only overflows when both have the same sign,
    // so shifting the sum toward zero always makes progress.
    fn accumulate(&mut self, value: Decimal) {
        loop {
            if let Some(sum) = self.sum.checked_add(value) {
                self.sum = sum;
                return;
            }
            if self.sum.is_sign_negative() {
                self.sum += CARRY_UNIT;
                self.carry -= 1;
            } else {
                self.sum -= CARRY_UNIT;
                self.carry += 1;
            }
        }
    }

    /// Returns the sum of all observed values, or `None` if it does not fit
    /// in a [`Decimal`].
    pub fn sum(&self) -> Option<Decimal> {
        let step = if self.carry < 0 { -CARRY_UNIT } else { CARRY_UNIT };
        let mut total = self.sum;
        for _ in 0..self.carry.unsigned_abs() {
            total = total.checked_add(step)?;
        }
        Some(total)
    }

    /// Returns the number of observed values.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the average, or `None` if nothing was observed.
    pub fn average(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }
        let count = Decimal::from(self.count);

        // carry * 10^28 / n == q * 10^28 + r * (10^28 / n), with |r| < n.
        let n = self.count as i64;
        let (q, r) = (self.carry / n, self.carry % n);
        let mut average = (Decimal::from(r) * (CARRY_UNIT / count))
            .saturating_add(self.sum / count);

        let step = if q < 0 { -CARRY_UNIT } else { CARRY_UNIT };
        for _ in 0..q.unsigned_abs() {
            average = average.saturating_add(step);
        }

        average =
            average.round_dp_with_strategy(self.scale, RoundingStrategy::ToPositiveInfinity);
        average.rescale(self.scale);
        Some(average)
    }
}

impl FromIterator<Decimal> for DecimalAverager {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        let mut averager = Self::new();
        averager.extend(iter);
        averager
    }
}

impl Extend<Decimal> for DecimalAverager {
    fn extend<I: IntoIterator<Item = Decimal>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

/// Averages a sequence of decimals, returning `None` if it is empty.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use rwcounter::reducers::average::average;
///
/// assert_eq!(average(Vec::<Decimal>::new()), None);
/// assert_eq!(average([Decimal::ONE]), Some(Decimal::ONE));
/// ```
pub fn average(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values.into_iter().collect::<DecimalAverager>().average()
}
