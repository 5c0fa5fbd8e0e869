//! Income-based borrowing capacity.
//!
//! Two monthly payment ceilings are derived from income: an aggressive one
//! from the maximum debt ratio and a conservative one from net income. Each
//! is turned into a loan amount with the standard amortization formula and
//! topped up with the available down payment.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::Assumptions;
use crate::error::RealtyFinanceError;
use crate::time_value::{checked_product, checked_sum, monthly_rate, principal_from_payment};
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Percent};
use crate::{validation, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

fn default_max_debt_ratio() -> Percent {
    dec!(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub down_payment_available: Money,
    /// Annual mortgage rate as a percentage.
    pub interest_rate: Percent,
    /// Largest share of income that may go to the housing payment, in percent.
    #[serde(default = "default_max_debt_ratio")]
    pub max_debt_ratio: Percent,
    #[serde(default)]
    pub assumptions: Assumptions,
}

impl AffordabilityInput {
    pub fn new(
        monthly_income: Money,
        monthly_expenses: Money,
        down_payment_available: Money,
        interest_rate: Percent,
    ) -> Self {
        Self {
            monthly_income,
            monthly_expenses,
            down_payment_available,
            interest_rate,
            max_debt_ratio: default_max_debt_ratio(),
            assumptions: Assumptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub max_mortgage: Money,
    /// Highest monthly housing payment under the debt ratio.
    pub max_rent: Money,
    pub recommended_mortgage: Money,
    /// Conservative monthly housing payment from net income.
    pub recommended_rent: Money,
    pub debt_to_income_ratio: Percent,
    pub is_affordable: bool,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn calculate_affordability(
    input: &AffordabilityInput,
) -> RealtyFinanceResult<ComputationOutput<AffordabilityResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate(input)?;
    let assumptions = &input.assumptions;

    let net_income = input.monthly_income - input.monthly_expenses;
    let max_monthly_payment = checked_product(
        input.monthly_income,
        input.max_debt_ratio / dec!(100),
        "maximum monthly payment",
    )?;

    let safe_monthly_payment = (net_income * assumptions.safe_payment_ratio)
        .max(Decimal::ZERO)
        .min(max_monthly_payment);
    if net_income <= Decimal::ZERO {
        warnings.push(format!(
            "Monthly expenses of {} consume the entire income; conservative payment set to zero",
            input.monthly_expenses
        ));
    }

    let rate = monthly_rate(input.interest_rate);
    let term = assumptions.affordability_term_months;
    let max_loan = principal_from_payment(max_monthly_payment, rate, term)?;
    let safe_loan = principal_from_payment(safe_monthly_payment, rate, term)?;

    let max_mortgage = checked_sum(max_loan, input.down_payment_available, "maximum mortgage")?;
    let recommended_mortgage =
        checked_sum(safe_loan, input.down_payment_available, "recommended mortgage")?;

    let debt_to_income_ratio = max_monthly_payment / input.monthly_income * dec!(100);
    let is_affordable = debt_to_income_ratio <= input.max_debt_ratio && net_income > Decimal::ZERO;

    let mut recommendations = Vec::new();
    if !is_affordable {
        recommendations.push(
            "The housing payment is not affordable at current income and expenses; \
             reduce expenses or target a smaller loan."
                .to_string(),
        );
    }
    if input.down_payment_available < max_mortgage * assumptions.min_down_payment_ratio {
        recommendations.push(format!(
            "Down payment is below {}% of the maximum mortgage; consider saving more before buying.",
            round_money(assumptions.min_down_payment_ratio * dec!(100))
        ));
    }
    if debt_to_income_ratio > assumptions.high_leverage_ratio {
        recommendations.push(format!(
            "Debt-to-income ratio above {}% means high leverage; a lower payment is safer.",
            assumptions.high_leverage_ratio
        ));
    }

    tracing::debug!(
        %net_income,
        %max_monthly_payment,
        %safe_monthly_payment,
        is_affordable,
        "affordability computed"
    );

    let output = AffordabilityResult {
        max_mortgage: round_money(max_mortgage),
        max_rent: round_money(max_monthly_payment),
        recommended_mortgage: round_money(recommended_mortgage),
        recommended_rent: round_money(safe_monthly_payment),
        debt_to_income_ratio: debt_to_income_ratio
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        is_affordable,
        recommendations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Debt-ratio borrowing capacity over a fixed amortization term",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &AffordabilityInput) -> RealtyFinanceResult<()> {
    validation::positive("monthly_income", input.monthly_income)?;
    validation::non_negative("monthly_expenses", input.monthly_expenses)?;
    validation::non_negative("down_payment_available", input.down_payment_available)?;
    validation::non_negative("interest_rate", input.interest_rate)?;
    validation::positive("max_debt_ratio", input.max_debt_ratio)?;
    if input.max_debt_ratio > dec!(100) {
        return Err(RealtyFinanceError::InvalidInput {
            field: "max_debt_ratio".into(),
            reason: "max_debt_ratio cannot exceed 100%".into(),
        });
    }
    input.assumptions.validate()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn run(input: &AffordabilityInput) -> AffordabilityResult {
        calculate_affordability(input).unwrap().result
    }

    #[test]
    fn test_reference_household_is_affordable_but_leveraged() {
        let input = AffordabilityInput::new(
            dec!(20_000_000),
            dec!(12_000_000),
            dec!(100_000_000),
            dec!(20),
        );
        let out = run(&input);
        assert!(out.is_affordable);
        assert_eq!(out.debt_to_income_ratio, dec!(30));
        assert_eq!(out.max_rent, dec!(6_000_000));
        // 8,000,000 net * 30% = 2,400,000
        assert_eq!(out.recommended_rent, dec!(2_400_000));
        assert!(out.recommended_mortgage < out.max_mortgage);
        assert!(out.recommendations.iter().any(|r| r.contains("high leverage")));
    }

    #[test]
    fn test_zero_rate_capacity_is_payment_times_term() {
        let mut input = AffordabilityInput::new(dec!(10_000), dec!(0), dec!(0), dec!(0));
        input.max_debt_ratio = dec!(20);
        let out = run(&input);
        // 2,000 * 360
        assert_eq!(out.max_mortgage, dec!(720_000));
        // safe payment 3,000 clamped to the 2,000 ceiling
        assert_eq!(out.recommended_rent, dec!(2_000));
        assert_eq!(out.recommended_mortgage, out.max_mortgage);
    }

    #[test]
    fn test_expenses_exceeding_income_is_unaffordable() {
        let input = AffordabilityInput::new(dec!(5_000), dec!(6_000), dec!(10_000), dec!(12));
        let out = calculate_affordability(&input).unwrap();
        assert!(!out.result.is_affordable);
        assert_eq!(out.result.recommended_rent, Decimal::ZERO);
        assert_eq!(out.result.recommended_mortgage, dec!(10_000));
        assert!(out.result.recommendations[0].contains("not affordable"));
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_small_down_payment_flagged() {
        let input = AffordabilityInput::new(dec!(10_000), dec!(2_000), dec!(1_000), dec!(6));
        let out = run(&input);
        assert!(out.recommendations.iter().any(|r| r.contains("Down payment")));
    }

    #[test]
    fn test_advisories_in_order() {
        let input = AffordabilityInput::new(dec!(5_000), dec!(6_000), dec!(0), dec!(12));
        let out = run(&input);
        assert_eq!(out.recommendations.len(), 3);
        assert!(out.recommendations[0].contains("not affordable"));
        assert!(out.recommendations[1].contains("Down payment"));
        assert!(out.recommendations[2].contains("high leverage"));
    }

    #[test]
    fn test_validation() {
        assert!(calculate_affordability(&AffordabilityInput::new(dec!(0), dec!(0), dec!(0), dec!(5))).is_err());
        let mut input = AffordabilityInput::new(dec!(100), dec!(0), dec!(0), dec!(5));
        input.max_debt_ratio = dec!(120);
        assert!(calculate_affordability(&input).is_err());
    }

    #[test]
    fn test_debt_ratio_rounds_half_away_from_zero() {
        let mut input = AffordabilityInput::new(dec!(10_000), dec!(1_000), dec!(0), dec!(12));
        input.max_debt_ratio = dec!(12.345);
        assert_eq!(run(&input).debt_to_income_ratio, dec!(12.35));
    }

    #[test]
    fn test_oversized_income_reports_overflow() {
        // 1e27 per month over 360 months at zero rate does not fit in a Decimal
        let income = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        let mut input = AffordabilityInput::new(income, dec!(0), dec!(0), dec!(0));
        input.max_debt_ratio = dec!(100);
        let err = calculate_affordability(&input).unwrap_err();
        assert!(matches!(err, RealtyFinanceError::Overflow { .. }), "{err:?}");
    }
}
