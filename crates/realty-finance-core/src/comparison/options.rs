//! Side-by-side cost of two financing options over a common horizon.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::config::Assumptions;
use crate::time_value::{checked_product, level_payment, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Percent};
use crate::{validation, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancingType {
    Rent,
    Mortgage,
}

impl fmt::Display for FinancingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinancingType::Rent => write!(f, "rent"),
            FinancingType::Mortgage => write!(f, "mortgage"),
        }
    }
}

/// One side of a comparison as entered by the caller.
///
/// For rent, `amount` is the monthly rent and `interest_rate` is ignored.
/// For a mortgage, `amount` is the loan principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingOptionInput {
    #[serde(rename = "type")]
    pub kind: FinancingType,
    pub amount: Money,
    #[serde(default)]
    pub interest_rate: Percent,
    /// Loan term; defaults to the comparison horizon.
    #[serde(default)]
    pub term_months: Option<u32>,
}

fn default_comparison_period() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub option1: FinancingOptionInput,
    pub option2: FinancingOptionInput,
    #[serde(default = "default_comparison_period")]
    pub comparison_period_months: u32,
    #[serde(default)]
    pub assumptions: Assumptions,
}

impl ComparisonInput {
    /// Comparison over the default 60-month horizon.
    pub fn new(option1: FinancingOptionInput, option2: FinancingOptionInput) -> Self {
        Self {
            option1,
            option2,
            comparison_period_months: default_comparison_period(),
            assumptions: Assumptions::default(),
        }
    }
}

/// Costed option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageOption {
    #[serde(rename = "type")]
    pub kind: FinancingType,
    pub monthly_payment: Money,
    pub total_cost: Money,
    pub initial_cost: Money,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetterOption {
    Option1,
    Option2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub option1: MortgageOption,
    pub option2: MortgageOption,
    pub better_option: BetterOption,
    pub savings: Money,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Cost both options over the horizon and pick the cheaper one.
///
/// Ties go to `option1`.
pub fn compare_mortgage_options(
    input: &ComparisonInput,
) -> RealtyFinanceResult<ComputationOutput<ComparisonResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validation::months("comparison_period_months", input.comparison_period_months)?;
    input.assumptions.validate()?;
    let horizon = input.comparison_period_months;

    let (option1, total1) = cost_option("option1", &input.option1, horizon, &input.assumptions, &mut warnings)?;
    let (option2, total2) = cost_option("option2", &input.option2, horizon, &input.assumptions, &mut warnings)?;

    let better_option = if total1 <= total2 {
        BetterOption::Option1
    } else {
        BetterOption::Option2
    };
    let savings = round_money((total1 - total2).abs());

    tracing::debug!(%total1, %total2, ?better_option, "options compared");

    let (label, winner) = match better_option {
        BetterOption::Option1 => ("Option 1", &option1),
        BetterOption::Option2 => ("Option 2", &option2),
    };
    let recommendation = format!(
        "{label} ({}) is more economical over {horizon} months, saving {savings}.",
        winner.kind
    );

    let output = ComparisonResult {
        option1,
        option2,
        better_option,
        savings,
        recommendation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rent vs. mortgage total cost comparison",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns the costed option and its unrounded total cost.
fn cost_option(
    label: &str,
    option: &FinancingOptionInput,
    horizon: u32,
    assumptions: &Assumptions,
    warnings: &mut Vec<String>,
) -> RealtyFinanceResult<(MortgageOption, Money)> {
    validation::positive(&format!("{label}.amount"), option.amount)?;

    match option.kind {
        FinancingType::Rent => {
            let total = checked_product(option.amount, Decimal::from(horizon), "total rent over horizon")?;
            Ok((
                MortgageOption {
                    kind: FinancingType::Rent,
                    monthly_payment: round_money(option.amount),
                    total_cost: round_money(total),
                    initial_cost: Decimal::ZERO,
                    description: format!(
                        "Rent of {} per month for {horizon} months",
                        round_money(option.amount)
                    ),
                },
                total,
            ))
        }
        FinancingType::Mortgage => {
            validation::non_negative(&format!("{label}.interest_rate"), option.interest_rate)?;
            let term = option.term_months.unwrap_or(horizon);
            validation::months(&format!("{label}.term_months"), term)?;
            if term < horizon {
                warnings.push(format!(
                    "{label}: mortgage term of {term} months ends before the {horizon}-month horizon"
                ));
            }

            let payment = level_payment(option.amount, monthly_rate(option.interest_rate), term)?;
            let total = checked_product(
                payment,
                Decimal::from(horizon.min(term)),
                "mortgage payments over horizon",
            )?;
            Ok((
                MortgageOption {
                    kind: FinancingType::Mortgage,
                    monthly_payment: round_money(payment),
                    total_cost: round_money(total),
                    initial_cost: round_money(option.amount * assumptions.down_payment_ratio),
                    description: format!(
                        "Mortgage of {} at {}% over {term} months",
                        round_money(option.amount),
                        option.interest_rate
                    ),
                },
                total,
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rent(amount: Decimal) -> FinancingOptionInput {
        FinancingOptionInput {
            kind: FinancingType::Rent,
            amount,
            interest_rate: Decimal::ZERO,
            term_months: None,
        }
    }

    fn mortgage(amount: Decimal, rate: Decimal, term: Option<u32>) -> FinancingOptionInput {
        FinancingOptionInput {
            kind: FinancingType::Mortgage,
            amount,
            interest_rate: rate,
            term_months: term,
        }
    }

    #[test]
    fn test_rent_cost_is_amount_times_horizon() {
        let input = ComparisonInput::new(rent(dec!(1_000)), rent(dec!(1_200)));
        let out = compare_mortgage_options(&input).unwrap().result;
        assert_eq!(out.option1.total_cost, dec!(60_000));
        assert_eq!(out.option1.initial_cost, Decimal::ZERO);
        assert_eq!(out.better_option, BetterOption::Option1);
        assert_eq!(out.savings, dec!(12_000));
    }

    #[test]
    fn test_mortgage_uses_level_payment_and_down_payment() {
        // 1,000,000 at 12% over 12 months: PMT = 88,848.79
        let input = ComparisonInput {
            comparison_period_months: 12,
            ..ComparisonInput::new(mortgage(dec!(1_000_000), dec!(12), None), rent(dec!(90_000)))
        };
        let out = compare_mortgage_options(&input).unwrap().result;
        assert_eq!(out.option1.monthly_payment, dec!(88_849));
        assert_eq!(out.option1.initial_cost, dec!(200_000));
        assert_eq!(out.option1.total_cost, dec!(1_066_185));
        assert_eq!(out.better_option, BetterOption::Option1);
        assert!(out.recommendation.starts_with("Option 1 (mortgage)"));
    }

    #[test]
    fn test_short_mortgage_term_caps_payment_months() {
        let input = ComparisonInput::new(mortgage(dec!(12_000), dec!(0), Some(12)), rent(dec!(100)));
        let out = compare_mortgage_options(&input);
        let out = out.unwrap();
        // 12 payments of 1,000, not 60
        assert_eq!(out.result.option1.total_cost, dec!(12_000));
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.result.better_option, BetterOption::Option2);
    }

    #[test]
    fn test_swapping_options_swaps_winner() {
        let a = mortgage(dec!(500_000), dec!(18), Some(120));
        let b = rent(dec!(8_000));
        let forward = compare_mortgage_options(&ComparisonInput::new(a.clone(), b.clone())).unwrap().result;
        let reverse = compare_mortgage_options(&ComparisonInput::new(b, a)).unwrap().result;
        assert_ne!(forward.better_option, reverse.better_option);
        assert_eq!(forward.savings, reverse.savings);
    }

    #[test]
    fn test_tie_goes_to_option1() {
        let input = ComparisonInput::new(rent(dec!(1_000)), rent(dec!(1_000)));
        let out = compare_mortgage_options(&input).unwrap().result;
        assert_eq!(out.better_option, BetterOption::Option1);
        assert_eq!(out.savings, Decimal::ZERO);
    }

    #[test]
    fn test_deserializes_type_field() {
        let json = r#"{
            "option1": {"type": "rent", "amount": "1000"},
            "option2": {"type": "mortgage", "amount": "50000", "interest_rate": "10", "term_months": 120}
        }"#;
        let input: ComparisonInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.option2.kind, FinancingType::Mortgage);
        assert_eq!(input.comparison_period_months, 60);
    }

    #[test]
    fn test_validation() {
        let input = ComparisonInput::new(rent(dec!(0)), rent(dec!(1)));
        assert!(compare_mortgage_options(&input).is_err());
        let input = ComparisonInput {
            comparison_period_months: 0,
            ..ComparisonInput::new(rent(dec!(1)), rent(dec!(1)))
        };
        assert!(compare_mortgage_options(&input).is_err());
    }

    #[test]
    fn test_oversized_rent_total_reports_overflow() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        let input = ComparisonInput {
            comparison_period_months: 1200,
            ..ComparisonInput::new(rent(huge), rent(huge))
        };
        let err = compare_mortgage_options(&input).unwrap_err();
        assert!(matches!(err, crate::error::RealtyFinanceError::Overflow { .. }), "{err:?}");
    }
}
