//! Currency-keyed aggregation of monetary amounts.
//!
//! [`max_by_currency`] and [`sum_by_currency`] fold a collection of
//! [`Money`] values into one entry per currency present in the input.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// ISO 4217 currency of a [`Money`] amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// Polish złoty.
    Pln,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Swiss franc.
    Chf,
}

impl Currency {
    /// Returns the three-letter ISO code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Chf => "CHF",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in a given currency.
///
/// # Examples
///
/// ```rust
/// use rwcounter::reducers::money::{Currency, Money};
///
/// let price = Money::of("19.99", Currency::Eur).unwrap();
/// assert_eq!(price.to_string(), "19.99 EUR");
///
/// assert!(Money::of("nineteen", Currency::Eur).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new amount of money.
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Parses `amount` as a decimal and pairs it with `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAmount`](crate::Error::InvalidAmount) if
    /// `amount` is not a valid decimal number.
    pub fn of(amount: &str, currency: Currency) -> Result<Self> {
        Ok(Self::new(Decimal::from_str(amount)?, currency))
    }

    /// Returns the amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub const fn currency(&self) -> Currency {
        self.currency
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Returns the largest amount seen for each currency.
///
/// Amounts are compared numerically, so `21.0` and `21.00` are equal; on a tie
/// the first amount encountered is kept.
///
/// # Examples
///
/// ```rust
/// use rust_decimal::Decimal;
/// use rwcounter::reducers::money::{max_by_currency, Currency, Money};
///
/// let monies = [
///     Money::new(Decimal::new(100, 1), Currency::Pln),
///     Money::new(Decimal::new(150, 1), Currency::Usd),
///     Money::new(Decimal::new(210, 1), Currency::Pln),
/// ];
///
/// let max = max_by_currency(&monies);
/// assert_eq!(max[&Currency::Pln], Decimal::new(210, 1));
/// assert_eq!(max[&Currency::Usd], Decimal::new(150, 1));
/// ```
pub fn max_by_currency<'a>(monies: impl IntoIterator<Item = &'a Money>) -> HashMap<Currency, Decimal> {
    let mut max = HashMap::new();
    for money in monies {
        max.entry(money.currency)
            .and_modify(|current: &mut Decimal| {
                if money.amount > *current {
                    *current = money.amount;
                }
            })
            .or_insert(money.amount);
    }
    max
}

/// Returns the total amount for each currency.
pub fn sum_by_currency<'a>(monies: impl IntoIterator<Item = &'a Money>) -> HashMap<Currency, Decimal> {
    let mut sum = HashMap::new();
    for money in monies {
        sum.entry(money.currency)
            .and_modify(|total: &mut Decimal| *total += money.amount)
            .or_insert(money.amount);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    fn money(amount: &str, currency: Currency) -> Money {
        Money::of(amount, currency).unwrap()
    }

    #[test]
    fn test_of() {
        let m = money("10.0", Currency::Pln);
        assert_eq!(m.amount(), dec!(10.0));
        assert_eq!(m.currency(), Currency::Pln);
    }

    #[test]
    fn test_of_invalid_amount() {
        let err = Money::of("ten", Currency::Usd).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(money("15.50", Currency::Usd).to_string(), "15.50 USD");
        assert_eq!(Currency::Chf.to_string(), "CHF");
    }

    #[test]
    fn test_max_by_currency() {
        let monies = vec![
            money("10.0", Currency::Pln),
            money("15.0", Currency::Usd),
            money("21.0", Currency::Pln),
        ];
        let expected = HashMap::from([(Currency::Pln, dec!(21.0)), (Currency::Usd, dec!(15.0))]);
        assert_eq!(max_by_currency(&monies), expected);
    }

    #[test]
    fn test_max_by_currency_later_smaller_value() {
        let monies = vec![
            money("10.0", Currency::Pln),
            money("15.0", Currency::Usd),
            money("21.0", Currency::Pln),
            money("20.0", Currency::Pln),
        ];
        let expected = HashMap::from([(Currency::Pln, dec!(21.0)), (Currency::Usd, dec!(15.0))]);
        assert_eq!(max_by_currency(&monies), expected);
    }

    #[test]
    fn test_max_by_currency_keeps_first_on_tie() {
        let monies = vec![money("21.0", Currency::Eur), money("21.00", Currency::Eur)];
        let max = max_by_currency(&monies);
        assert_eq!(max[&Currency::Eur].to_string(), "21.0");
    }

    #[test]
    fn test_max_by_currency_negative_amounts() {
        let monies = vec![money("-3", Currency::Gbp), money("-1", Currency::Gbp)];
        assert_eq!(max_by_currency(&monies)[&Currency::Gbp], dec!(-1));
    }

    #[test]
    fn test_sum_by_currency() {
        let monies = vec![
            money("10.0", Currency::Pln),
            money("15.0", Currency::Usd),
            money("21.0", Currency::Pln),
        ];
        let expected = HashMap::from([(Currency::Pln, dec!(31.0)), (Currency::Usd, dec!(15.0))]);
        assert_eq!(sum_by_currency(&monies), expected);
    }

    #[test]
    fn test_sum_by_currency_many() {
        let monies = vec![
            money("10.0", Currency::Pln),
            money("15.0", Currency::Usd),
            money("21.0", Currency::Pln),
            money("20.0", Currency::Pln),
            money("15.0", Currency::Usd),
        ];
        let expected = HashMap::from([(Currency::Pln, dec!(51.0)), (Currency::Usd, dec!(30.0))]);
        assert_eq!(sum_by_currency(&monies), expected);
    }

    #[test]
    fn test_empty_input() {
        let monies: Vec<Money> = vec![];
        assert!(max_by_currency(&monies).is_empty());
        assert!(sum_by_currency(&monies).is_empty());
    }
}
