//! Prices and totals.
//!
//! Every amount is an integer count of the currency's minor unit, so cart
//! totals never pick up floating-point drift. Decimal input from the
//! manager is rounded once, on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a store can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    INR,
    PKR,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::INR => "INR",
            Currency::PKR => "PKR",
        }
    }

    /// Prefix used when printing prices.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
            Currency::PKR => "Rs",
        }
    }

    /// Digits after the decimal point in printed prices.
    pub fn decimal_places(&self) -> u32 {
        if matches!(self, Currency::JPY) {
            0
        } else {
            2
        }
    }

    /// Look up a currency by code, ignoring case and surrounding spaces.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::INR,
            Currency::PKR,
        ]
        .into_iter()
        .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Minor units (cents for USD).
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a decimal price, rounding half away from zero to the minor unit.
    ///
    /// ```
    /// use fash_commerce::money::{Currency, Money};
    /// let shirt = Money::from_decimal(19.99, Currency::USD).unwrap();
    /// assert_eq!(shirt.amount_cents, 1999);
    /// ```
    ///
    /// Returns `None` for NaN, infinities, and amounts that do not fit.
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = (amount * currency.minor_per_major() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which does not fit.
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents.is_negative()
    }

    /// Amount in major units, for display only.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Symbol and amount, like `$60.00`.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Amount alone, like `60.00`.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Price of `factor` units. `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Sum line amounts starting from zero in `currency`.
    pub fn try_sum<'a>(
        mut amounts: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        amounts.try_fold(Money::zero(currency), |total, amount| total.try_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
