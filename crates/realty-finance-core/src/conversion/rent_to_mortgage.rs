//! Rent-to-deposit conversion with an optional appreciation-adjusted
//! year-by-year breakdown and a break-even estimate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::Assumptions;
use crate::time_value::{checked_product, checked_quotient, checked_sum, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Decision, Money, Percent};
use crate::{validation, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

fn default_duration() -> u32 {
    12
}

fn default_property_appreciation() -> Percent {
    dec!(8)
}

fn default_year_count() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentToMortgageOptions {
    /// Grow the annual rent with property appreciation year over year.
    #[serde(default)]
    pub include_property_growth: bool,
    /// Search the yearly breakdown for the break-even year.
    #[serde(default = "default_true")]
    pub calculate_break_even: bool,
    /// Years covered by the yearly breakdown.
    #[serde(default = "default_year_count")]
    pub year_count: u32,
}

impl Default for RentToMortgageOptions {
    fn default() -> Self {
        Self {
            include_property_growth: false,
            calculate_break_even: true,
            year_count: default_year_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentToMortgageInput {
    pub monthly_rent: Money,
    /// Annual conversion rate as a percentage.
    pub interest_rate: Percent,
    /// Lease length in months. Recorded with the assumptions; the yearly
    /// breakdown is driven by `options.year_count`.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Annual property appreciation as a percentage.
    #[serde(default = "default_property_appreciation")]
    pub property_appreciation: Percent,
    #[serde(default)]
    pub options: RentToMortgageOptions,
    #[serde(default)]
    pub assumptions: Assumptions,
}

impl RentToMortgageInput {
    /// Input with every optional field at its default.
    pub fn new(monthly_rent: Money, interest_rate: Percent) -> Self {
        Self {
            monthly_rent,
            interest_rate,
            duration: default_duration(),
            property_appreciation: default_property_appreciation(),
            options: RentToMortgageOptions::default(),
            assumptions: Assumptions::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRentDetail {
    pub year: u32,
    pub annual_rent: Money,
    pub cumulative_rent: Money,
    /// Deposit whose simple monthly interest equals the cumulative rent
    /// spread over twelve months.
    pub equivalent_mortgage: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentCalculationResult {
    /// Deposit equivalent to the monthly rent at the base rate.
    pub mortgage_amount: Money,
    pub monthly_payment: Money,
    /// Cumulative rent at the final year minus the base deposit. May be negative.
    pub total_interest: Money,
    /// `None` when break-even analysis was switched off.
    pub break_even_months: Option<u32>,
    pub decision: Decision,
    pub recommendation: String,
    pub details: Vec<YearlyRentDetail>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a monthly rent into its equivalent mortgage deposit.
pub fn calculate_rent_to_mortgage(
    input: &RentToMortgageInput,
) -> RealtyFinanceResult<ComputationOutput<RentCalculationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate(input)?;

    let rate = monthly_rate(input.interest_rate);
    let base_mortgage = checked_quotient(input.monthly_rent, rate, "rent-to-mortgage monthly rate")?;
    let base_annual_rent = checked_product(input.monthly_rent, dec!(12), "annual rent")?;
    let growth_step = Decimal::ONE + input.property_appreciation / dec!(100);

    let mut details = Vec::with_capacity(input.options.year_count as usize);
    let mut growth = Decimal::ONE;
    let mut cumulative_rent = Decimal::ZERO;
    let mut break_even_year: Option<u32> = None;

    for year in 1..=input.options.year_count {
        let annual_rent = if input.options.include_property_growth {
            let rent = checked_product(base_annual_rent, growth, "appreciated annual rent")?;
            growth = checked_product(growth, growth_step, "property appreciation")?;
            rent
        } else {
            base_annual_rent
        };
        cumulative_rent = checked_sum(cumulative_rent, annual_rent, "cumulative rent")?;

        if break_even_year.is_none() && cumulative_rent >= base_mortgage {
            break_even_year = Some(year);
        }

        details.push(YearlyRentDetail {
            year,
            annual_rent: round_money(annual_rent),
            cumulative_rent: round_money(cumulative_rent),
            equivalent_mortgage: round_money(
                checked_quotient(cumulative_rent, rate, "equivalent mortgage")? / dec!(12),
            ),
        });
    }

    let break_even_months = if input.options.calculate_break_even {
        match break_even_year {
            Some(year) => Some(year * 12),
            None => {
                warnings.push(format!(
                    "Cumulative rent does not reach the equivalent mortgage within {} years; \
                     break-even set to the end of the horizon",
                    input.options.year_count
                ));
                Some(input.options.year_count * 12)
            }
        }
    } else {
        None
    };

    let decision = match break_even_months {
        Some(months) if months <= input.assumptions.buy_break_even_months => Decision::Buy,
        _ => Decision::Rent,
    };

    let total_interest = cumulative_rent - base_mortgage;
    if total_interest < Decimal::ZERO {
        warnings.push(
            "Cumulative rent over the horizon is below the equivalent mortgage; \
             total interest is negative"
                .into(),
        );
    }

    tracing::debug!(
        %base_mortgage,
        %cumulative_rent,
        ?break_even_months,
        ?decision,
        "rent-to-mortgage computed"
    );

    let mortgage_amount = round_money(base_mortgage);
    let recommendation = recommend(decision, mortgage_amount, break_even_months);

    let output = RentCalculationResult {
        mortgage_amount,
        monthly_payment: round_money(input.monthly_rent),
        total_interest: round_money(total_interest),
        break_even_months,
        decision,
        recommendation,
        details,
    };

    let methodology = if input.options.include_property_growth {
        "Rent-to-deposit conversion with annual property appreciation"
    } else {
        "Rent-to-deposit conversion"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate(input: &RentToMortgageInput) -> RealtyFinanceResult<()> {
    validation::positive("monthly_rent", input.monthly_rent)?;
    validation::positive("interest_rate", input.interest_rate)?;
    validation::months("duration", input.duration)?;
    validation::non_negative("property_appreciation", input.property_appreciation)?;
    validation::years("options.year_count", input.options.year_count)?;
    input.assumptions.validate()
}

fn recommend(decision: Decision, mortgage_amount: Money, break_even_months: Option<u32>) -> String {
    match (decision, break_even_months) {
        (Decision::Buy, Some(months)) => format!(
            "Buying is recommended: rent paid reaches the equivalent mortgage of \
             {mortgage_amount} within {months} months."
        ),
        (_, Some(months)) => format!(
            "Renting is recommended: rent paid takes {months} months to reach the \
             equivalent mortgage of {mortgage_amount}."
        ),
        (_, None) => format!(
            "Renting is recommended: no break-even point was computed against the \
             equivalent mortgage of {mortgage_amount}."
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RealtyFinanceError;
    use rust_decimal_macros::dec;

    fn run(input: &RentToMortgageInput) -> RentCalculationResult {
        calculate_rent_to_mortgage(input).unwrap().result
    }

    #[test]
    fn test_base_mortgage_amount() {
        // 10,000 / 1% = 1,000,000
        let out = run(&RentToMortgageInput::new(dec!(10_000), dec!(12)));
        assert_eq!(out.mortgage_amount, dec!(1_000_000));
        assert_eq!(out.monthly_payment, dec!(10_000));
    }

    #[test]
    fn test_yearly_details_without_growth() {
        let out = run(&RentToMortgageInput::new(dec!(10_000), dec!(12)));
        assert_eq!(out.details.len(), 5);
        assert_eq!(out.details[0].annual_rent, dec!(120_000));
        assert_eq!(out.details[4].cumulative_rent, dec!(600_000));
        // 600,000 / 0.01 / 12 = 5,000,000
        assert_eq!(out.details[4].equivalent_mortgage, dec!(5_000_000));
        // 600,000 - 1,000,000
        assert_eq!(out.total_interest, dec!(-400_000));
    }

    #[test]
    fn test_break_even_not_reached_defaults_to_horizon() {
        let out = calculate_rent_to_mortgage(&RentToMortgageInput::new(dec!(10_000), dec!(12))).unwrap();
        assert_eq!(out.result.break_even_months, Some(60));
        assert_eq!(out.result.decision, Decision::Rent);
        assert!(out.warnings.iter().any(|w| w.contains("break-even")));
    }

    #[test]
    fn test_break_even_reached_recommends_buying() {
        // Base mortgage = 10,000 / (40/1200) = 300,000; year 3 cumulative = 360,000
        let out = run(&RentToMortgageInput::new(dec!(10_000), dec!(40)));
        assert_eq!(out.mortgage_amount, dec!(300_000));
        assert_eq!(out.break_even_months, Some(36));
        assert_eq!(out.decision, Decision::Buy);
        assert!(out.recommendation.starts_with("Buying"));
    }

    #[test]
    fn test_property_growth_compounds_yearly() {
        let mut input = RentToMortgageInput::new(dec!(10_000), dec!(12));
        input.property_appreciation = dec!(10);
        input.options.include_property_growth = true;
        let out = run(&input);
        assert_eq!(out.details[0].annual_rent, dec!(120_000));
        assert_eq!(out.details[1].annual_rent, dec!(132_000));
        assert_eq!(out.details[2].annual_rent, dec!(145_200));
    }

    #[test]
    fn test_break_even_disabled() {
        let mut input = RentToMortgageInput::new(dec!(10_000), dec!(40));
        input.options.calculate_break_even = false;
        let out = run(&input);
        assert_eq!(out.break_even_months, None);
        assert_eq!(out.decision, Decision::Rent);
    }

    #[test]
    fn test_break_even_threshold_override() {
        let mut input = RentToMortgageInput::new(dec!(10_000), dec!(40));
        input.assumptions.buy_break_even_months = 24;
        let out = run(&input);
        assert_eq!(out.break_even_months, Some(36));
        assert_eq!(out.decision, Decision::Rent);
    }

    #[test]
    fn test_validation() {
        assert!(calculate_rent_to_mortgage(&RentToMortgageInput::new(dec!(0), dec!(12))).is_err());
        assert!(calculate_rent_to_mortgage(&RentToMortgageInput::new(dec!(100), dec!(0))).is_err());
        let mut input = RentToMortgageInput::new(dec!(100), dec!(12));
        input.options.year_count = 0;
        assert!(calculate_rent_to_mortgage(&input).is_err());
    }

    #[test]
    fn test_vanishing_rate_reports_overflow() {
        // 1e10 / (1e-20% / 1200) does not fit in a Decimal
        let input = RentToMortgageInput::new(dec!(10_000_000_000), Decimal::new(1, 20));
        let err = calculate_rent_to_mortgage(&input).unwrap_err();
        assert!(matches!(err, RealtyFinanceError::Overflow { .. }), "{err:?}");
    }
}
