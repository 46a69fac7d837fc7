//! Configuration types for payroll calculation.
//!
//! [`PayrollSettings`] is the file shape deserialized from YAML;
//! [`PayrollConfig`] is the validated form the engine consumes.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_NORMAL_TIME_THRESHOLD, DEFAULT_TAX_BRACKETS, TaxBracket, TaxSchedule,
};

/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default superannuation rate used when an employee has none.
pub const DEFAULT_SUPER_RATE: Decimal = Decimal::from_parts(115, 0, 0, false, 3);

/// Payroll settings as written in `payroll.yaml`. Omitted keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollSettings {
    /// Hours per pay period paid at the base rate before overtime applies.
    pub normal_time_threshold_hours: Decimal,
    /// Multiplier applied to the base rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Superannuation rate for employees without their own.
    pub default_super_rate: Decimal,
    /// Marginal tax brackets, in any order.
    pub tax_brackets: Vec<TaxBracket>,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            normal_time_threshold_hours: DEFAULT_NORMAL_TIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            default_super_rate: DEFAULT_SUPER_RATE,
            tax_brackets: DEFAULT_TAX_BRACKETS.to_vec(),
        }
    }
}

/// Validated payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    normal_time_threshold: Decimal,
    overtime_multiplier: Decimal,
    default_super_rate: Decimal,
    tax_schedule: TaxSchedule,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            normal_time_threshold: DEFAULT_NORMAL_TIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            default_super_rate: DEFAULT_SUPER_RATE,
            tax_schedule: TaxSchedule::default(),
        }
    }
}

impl PayrollConfig {
    /// Validates settings and builds a configuration.
    ///
    /// Returns a description of the first problem found.
    pub fn from_settings(settings: PayrollSettings) -> Result<Self, String> {
        if settings.normal_time_threshold_hours < Decimal::ZERO {
            return Err("normal_time_threshold_hours must not be negative".to_string());
        }
        if settings.overtime_multiplier < Decimal::ONE {
            return Err("overtime_multiplier must be at least 1".to_string());
        }
        if settings.default_super_rate < Decimal::ZERO {
            return Err("default_super_rate must not be negative".to_string());
        }

        for (i, bracket) in settings.tax_brackets.iter().enumerate() {
            if bracket.threshold < Decimal::ZERO {
                return Err(format!("tax bracket {} has a negative threshold", i));
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(format!("tax bracket {} rate must be between 0 and 1", i));
            }
            if settings.tax_brackets[..i]
                .iter()
                .any(|other| other.threshold == bracket.threshold)
            {
                return Err(format!(
                    "duplicate tax bracket threshold {}",
                    bracket.threshold
                ));
            }
        }

        Ok(Self {
            normal_time_threshold: settings.normal_time_threshold_hours,
            overtime_multiplier: settings.overtime_multiplier,
            default_super_rate: settings.default_super_rate,
            tax_schedule: TaxSchedule::new(settings.tax_brackets),
        })
    }

    /// Hours per period before overtime applies.
    pub fn normal_time_threshold(&self) -> Decimal {
        self.normal_time_threshold
    }

    /// Overtime rate multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }

    /// Fallback superannuation rate.
    pub fn default_super_rate(&self) -> Decimal {
        self.default_super_rate
    }

    /// The progressive tax schedule.
    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax_schedule
    }
}
