//! Progressive tax calculation.
//!
//! This module maps a gross pay amount to a tax amount using a marginal
//! bracket schedule: each dollar above a threshold is taxed only at that
//! bracket's rate. The schedule is a simplified illustrative table, not any
//! jurisdiction's withholding scale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Amounts above this threshold are taxed at `rate`.
    pub threshold: Decimal,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    pub const fn new(threshold: Decimal, rate: Decimal) -> Self {
        Self { threshold, rate }
    }
}

/// A bracket together with the tax already accrued at its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketBase {
    /// The bracket's lower threshold.
    pub threshold: Decimal,
    /// The bracket's marginal rate.
    pub rate: Decimal,
    /// Total tax on an amount exactly equal to `threshold`.
    pub base: Decimal,
}

/// The default schedule, highest threshold first.
pub const DEFAULT_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(
        Decimal::from_parts(5000, 0, 0, false, 0),
        Decimal::from_parts(45, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(3000, 0, 0, false, 0),
        Decimal::from_parts(37, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(1500, 0, 0, false, 0),
        Decimal::from_parts(325, 0, 0, false, 3),
    ),
    TaxBracket::new(
        Decimal::from_parts(900, 0, 0, false, 0),
        Decimal::from_parts(19, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(370, 0, 0, false, 0),
        Decimal::from_parts(10, 0, 0, false, 2),
    ),
];

/// A marginal tax schedule, kept sorted by descending threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_BRACKETS.to_vec())
    }
}

impl TaxSchedule {
    /// Creates a schedule from brackets in any order.
    pub fn new(mut brackets: Vec<TaxBracket>) -> Self {
        brackets.sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self { brackets }
    }

    /// Returns the brackets, highest threshold first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Calculates tax on `gross` with the additive bracket walk.
    ///
    /// Starting from the highest threshold, any amount above a threshold is
    /// taxed at that bracket's rate and the remainder is clamped down to the
    /// threshold before moving to the next bracket. Amounts at or below the
    /// lowest threshold incur no tax.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::TaxSchedule;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = TaxSchedule::default();
    /// assert_eq!(schedule.calculate(Decimal::new(370, 0)), Decimal::ZERO);
    /// assert_eq!(schedule.calculate(Decimal::new(1000, 0)), Decimal::new(72, 0));
    /// ```
    pub fn calculate(&self, gross: Decimal) -> Decimal {
        let mut remaining = gross;
        let mut tax = Decimal::ZERO;

        for bracket in &self.brackets {
            if remaining > bracket.threshold {
                tax += (remaining - bracket.threshold) * bracket.rate;
                remaining = bracket.threshold;
            }
        }

        tax
    }

    /// Returns each bracket with the cumulative tax owed at its threshold,
    /// highest threshold first.
    pub fn bracket_bases(&self) -> Vec<BracketBase> {
        let mut bases = Vec::with_capacity(self.brackets.len());
        let mut base = Decimal::ZERO;
        let mut previous: Option<&TaxBracket> = None;

        for bracket in self.brackets.iter().rev() {
            if let Some(lower) = previous {
                base += (bracket.threshold - lower.threshold) * lower.rate;
            }
            bases.push(BracketBase {
                threshold: bracket.threshold,
                rate: bracket.rate,
                base,
            });
            previous = Some(bracket);
        }

        bases.reverse();
        bases
    }

    /// Calculates tax on `gross` as `base + (gross - threshold) * rate` of the
    /// highest bracket `gross` exceeds. Always agrees with [`TaxSchedule::calculate`].
    pub fn calculate_from_bases(&self, gross: Decimal) -> Decimal {
        self.bracket_bases()
            .into_iter()
            .find(|b| gross > b.threshold)
            .map(|b| b.base + (gross - b.threshold) * b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Calculates tax on `gross` with the default schedule.
pub fn calculate_tax(gross: Decimal) -> Decimal {
    TaxSchedule::default().calculate(gross)
}
