//! Order Totals

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

/// Sales tax applied to an order subtotal, as a fraction in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTaxRate {
    #[error("tax rate is not a decimal number: {0}")]
    Malformed(String),

    #[error("tax rate must be at least 0 and below 1, got {0}")]
    OutOfRange(Decimal),
}

impl TaxRate {
    /// # Errors
    ///
    /// Returns [`InvalidTaxRate::OutOfRange`] unless `0 <= rate < 1`.
    pub fn new(rate: Decimal) -> Result<Self, InvalidTaxRate> {
        if rate.is_sign_negative() || rate >= Decimal::ONE {
            return Err(InvalidTaxRate::OutOfRange(rate));
        }

        Ok(Self(rate))
    }

    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Tax on `subtotal` minor units, rounded half away from zero to a whole minor unit.
    ///
    /// `None` if the result does not fit in `u64`.
    #[must_use]
    pub fn tax_on(self, subtotal: u64) -> Option<u64> {
        Decimal::from(subtotal)
            .checked_mul(self.0)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
    }
}

impl FromStr for TaxRate {
    type Err = InvalidTaxRate;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(value.trim())
            .map_err(|_parse| InvalidTaxRate::Malformed(value.to_owned()))?;

        Self::new(rate)
    }
}

impl Display for TaxRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Money summary of an order, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: u64,
    pub tax_amount: u64,
    pub total_amount: u64,
}

impl OrderTotals {
    /// Totals for the given line amounts. `None` on overflow.
    #[must_use]
    pub fn compute<I>(line_totals: I, rate: TaxRate) -> Option<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let subtotal = line_totals
            .into_iter()
            .try_fold(0_u64, u64::checked_add)?;

        let tax_amount = rate.tax_on(subtotal)?;

        Some(Self {
            subtotal,
            tax_amount,
            total_amount: subtotal.checked_add(tax_amount)?,
        })
    }
}
