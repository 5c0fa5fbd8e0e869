//! Tunable heuristics shared by the calculators.
//!
//! The defaults reproduce the fixed constants the calculators have always
//! used. Every input struct embeds an `Assumptions` value with
//! `#[serde(default)]`, so callers only spell out the fields they override.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RealtyFinanceError;
use crate::types::{Percent, Rate};
use crate::RealtyFinanceResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Share of the deposit treated as the "savings" benchmark when
    /// converting a mortgage deposit into rent (0.10 = 10%).
    pub savings_ratio: Rate,
    /// Down payment assumed for a mortgage option in a comparison.
    pub down_payment_ratio: Rate,
    /// Buying is recommended when rent breaks even within this many months.
    pub buy_break_even_months: u32,
    /// Share of net income considered a safe monthly housing payment.
    pub safe_payment_ratio: Rate,
    /// Term used to turn a monthly payment ceiling into borrowing capacity.
    pub affordability_term_months: u32,
    /// Debt-to-income percentage above which leverage is flagged.
    pub high_leverage_ratio: Percent,
    /// Minimum down payment, as a share of the maximum mortgage.
    pub min_down_payment_ratio: Rate,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            savings_ratio: dec!(0.10),
            down_payment_ratio: dec!(0.20),
            buy_break_even_months: 36,
            safe_payment_ratio: dec!(0.30),
            affordability_term_months: 360,
            high_leverage_ratio: dec!(25),
            min_down_payment_ratio: dec!(0.20),
        }
    }
}

impl Assumptions {
    pub fn validate(&self) -> RealtyFinanceResult<()> {
        let ratios = [
            ("assumptions.savings_ratio", self.savings_ratio),
            ("assumptions.down_payment_ratio", self.down_payment_ratio),
            ("assumptions.safe_payment_ratio", self.safe_payment_ratio),
            ("assumptions.min_down_payment_ratio", self.min_down_payment_ratio),
        ];
        for (field, value) in ratios {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(RealtyFinanceError::InvalidInput {
                    field: field.into(),
                    reason: "must be between 0 and 1".into(),
                });
            }
        }
        if self.affordability_term_months == 0 {
            return Err(RealtyFinanceError::InvalidInput {
                field: "assumptions.affordability_term_months".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.high_leverage_ratio < Decimal::ZERO || self.high_leverage_ratio > dec!(100) {
            return Err(RealtyFinanceError::InvalidInput {
                field: "assumptions.high_leverage_ratio".into(),
                reason: "must be a percentage between 0 and 100".into(),
            });
        }
        Ok(())
    }
}
