//! Stateless reducers over decimal values.
//!
//! These helpers have no shared state and no interaction with the
//! [`counters`](crate::counters) module; they are plain folds over iterators.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`money`] | Group [`Money`](money::Money) by currency, reduce to max or sum |
//! | [`average`] | Average a sequence of [`Decimal`](rust_decimal::Decimal)s |

pub mod average;
pub mod money;

pub use average::{average, DecimalAverager};
pub use money::{max_by_currency, sum_by_currency, Currency, Money};
