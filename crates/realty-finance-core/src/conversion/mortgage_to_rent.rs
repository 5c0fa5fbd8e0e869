//! Deposit-to-rent conversion.
//!
//! Treats a lump-sum deposit as earning simple monthly interest and reports
//! the rent that interest would pay for, optionally growing with inflation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::Assumptions;
use crate::time_value::{checked_product, checked_sum, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Decision, Money, Percent};
use crate::{validation, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

fn default_duration() -> u32 {
    12
}

fn default_inflation_rate() -> Percent {
    dec!(15)
}

fn default_year_count() -> u32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageToRentOptions {
    /// Grow each month's rent by the monthly inflation rate.
    #[serde(default)]
    pub include_inflation: bool,
    /// Attach a year-by-year rent projection to the result.
    #[serde(default)]
    pub calculate_projection: bool,
    /// Years covered by the projection.
    #[serde(default = "default_year_count")]
    pub year_count: u32,
}

impl Default for MortgageToRentOptions {
    fn default() -> Self {
        Self {
            include_inflation: false,
            calculate_projection: false,
            year_count: default_year_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageToRentInput {
    /// Deposit (mortgage) amount in currency units.
    pub mortgage_amount: Money,
    /// Annual conversion rate as a percentage (25 = 25%).
    pub interest_rate: Percent,
    /// Months covered by the monthly breakdown.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Annual inflation as a percentage.
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: Percent,
    #[serde(default)]
    pub options: MortgageToRentOptions,
    #[serde(default)]
    pub assumptions: Assumptions,
}

impl MortgageToRentInput {
    /// Input with every optional field at its default.
    pub fn new(mortgage_amount: Money, interest_rate: Percent) -> Self {
        Self {
            mortgage_amount,
            interest_rate,
            duration: default_duration(),
            inflation_rate: default_inflation_rate(),
            options: MortgageToRentOptions::default(),
            assumptions: Assumptions::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One month of the rent breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRentDetail {
    /// 1-based month index.
    pub month: u32,
    pub rent: Money,
    pub cumulative_total: Money,
    /// Display ramp `interest_rate * month / duration`. Not a compounding rate.
    pub interest_rate: Percent,
}

/// One year of the optional rent projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRentProjection {
    pub year: u32,
    pub annual_rent: Money,
    pub cumulative_rent: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageCalculationResult {
    /// Unadjusted base rent.
    pub monthly_rent: Money,
    /// Unadjusted base rent times twelve.
    pub annual_rent: Money,
    /// Sum of the (possibly inflation-adjusted) monthly rents.
    pub total_cost: Money,
    /// Savings benchmark: deposit times the savings ratio.
    pub savings: Money,
    pub decision: Decision,
    pub recommendation: String,
    pub details: Vec<MonthlyRentDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Vec<YearlyRentProjection>>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert a mortgage deposit into its equivalent monthly rent.
pub fn calculate_mortgage_to_rent(
    input: &MortgageToRentInput,
) -> RealtyFinanceResult<ComputationOutput<MortgageCalculationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate(input)?;

    if input.interest_rate > dec!(100) {
        warnings.push(format!(
            "Conversion rate of {}% is unusually high",
            input.interest_rate
        ));
    }
    if input.options.include_inflation && input.inflation_rate > dec!(60) {
        warnings.push(format!(
            "Inflation rate of {}% compounds aggressively over {} months",
            input.inflation_rate, input.duration
        ));
    }

    let rate = monthly_rate(input.interest_rate);
    let base_rent = checked_product(input.mortgage_amount, rate, "base rent")?;
    let inflation_step = Decimal::ONE + monthly_rate(input.inflation_rate);
    let duration = Decimal::from(input.duration);

    let mut details = Vec::with_capacity(input.duration as usize);
    let mut growth = Decimal::ONE;
    let mut total_cost = Decimal::ZERO;

    for month in 1..=input.duration {
        let rent = if input.options.include_inflation {
            let rent = checked_product(base_rent, growth, "inflation-adjusted rent")?;
            growth = checked_product(growth, inflation_step, "monthly inflation growth")?;
            rent
        } else {
            base_rent
        };
        total_cost = checked_sum(total_cost, rent, "cumulative rent")?;
        let ramp = checked_product(input.interest_rate, Decimal::from(month), "interest rate ramp")?;
        details.push(MonthlyRentDetail {
            month,
            rent: round_money(rent),
            cumulative_total: round_money(total_cost),
            interest_rate: ramp / duration,
        });
    }

    let projection = if input.options.calculate_projection {
        Some(project_years(base_rent, inflation_step, &input.options)?)
    } else {
        None
    };

    let savings = input.mortgage_amount * input.assumptions.savings_ratio;
    let decision = if total_cost < savings {
        Decision::Rent
    } else {
        Decision::Buy
    };

    tracing::debug!(
        %base_rent,
        %total_cost,
        %savings,
        ?decision,
        "mortgage-to-rent computed"
    );

    let total_cost = round_money(total_cost);
    let savings = round_money(savings);
    let recommendation = recommend(decision, total_cost, savings, input.duration);

    let output = MortgageCalculationResult {
        monthly_rent: round_money(base_rent),
        annual_rent: round_money(checked_product(base_rent, dec!(12), "annual rent")?),
        total_cost,
        savings,
        decision,
        recommendation,
        details,
        projection,
    };

    let methodology = if input.options.include_inflation {
        "Simple-interest deposit-to-rent conversion with monthly inflation compounding"
    } else {
        "Simple-interest deposit-to-rent conversion"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate(input: &MortgageToRentInput) -> RealtyFinanceResult<()> {
    validation::positive("mortgage_amount", input.mortgage_amount)?;
    validation::positive("interest_rate", input.interest_rate)?;
    validation::months("duration", input.duration)?;
    validation::non_negative("inflation_rate", input.inflation_rate)?;
    if input.options.calculate_projection {
        validation::years("options.year_count", input.options.year_count)?;
    }
    input.assumptions.validate()
}

/// Yearly totals, continuing the monthly inflation curve across years.
fn project_years(
    base_rent: Money,
    inflation_step: Decimal,
    options: &MortgageToRentOptions,
) -> RealtyFinanceResult<Vec<YearlyRentProjection>> {
    let mut rows = Vec::with_capacity(options.year_count as usize);
    let mut growth = Decimal::ONE;
    let mut cumulative = Decimal::ZERO;

    for year in 1..=options.year_count {
        let mut annual = Decimal::ZERO;
        for _ in 0..12 {
            let rent = if options.include_inflation {
                let rent = checked_product(base_rent, growth, "projected rent")?;
                growth = checked_product(growth, inflation_step, "projected inflation growth")?;
                rent
            } else {
                base_rent
            };
            annual = checked_sum(annual, rent, "projected annual rent")?;
        }
        cumulative = checked_sum(cumulative, annual, "projected cumulative rent")?;
        rows.push(YearlyRentProjection {
            year,
            annual_rent: round_money(annual),
            cumulative_rent: round_money(cumulative),
        });
    }
    Ok(rows)
}

fn recommend(decision: Decision, total_cost: Money, savings: Money, duration: u32) -> String {
    match decision {
        Decision::Rent => format!(
            "Renting is recommended: total rent of {total_cost} over {duration} months \
             stays below the savings benchmark of {savings}."
        ),
        Decision::Buy => format!(
            "Buying is recommended: total rent of {total_cost} over {duration} months \
             exceeds the savings benchmark of {savings}."
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

    fn run(input: &MortgageToRentInput) -> MortgageCalculationResult {
        calculate_mortgage_to_rent(input).unwrap().result
    }

    #[test]
    fn test_base_rent_rounds_to_nearest_unit() {
        let out = run(&MortgageToRentInput::new(dec!(500_000_000), dec!(25)));
        assert_eq!(out.monthly_rent, dec!(10_416_667));
        assert_eq!(out.annual_rent, dec!(125_000_000));
    }

    #[test]
    fn test_flat_rent_total_and_buy_decision() {
        let out = run(&MortgageToRentInput::new(dec!(500_000_000), dec!(25)));
        // 12 flat months = 125,000,000 > 50,000,000 savings benchmark
        assert_eq!(out.total_cost, dec!(125_000_000));
        assert_eq!(out.savings, dec!(50_000_000));
        assert_eq!(out.decision, Decision::Buy);
        assert!(out.recommendation.starts_with("Buying"));
    }

    #[test]
    fn test_short_duration_recommends_rent() {
        let mut input = MortgageToRentInput::new(dec!(1_000_000), dec!(12));
        input.duration = 5;
        let out = run(&input);
        // 5 * 10,000 = 50,000 < 100,000
        assert_eq!(out.total_cost, dec!(50_000));
        assert_eq!(out.decision, Decision::Rent);
    }

    #[test]
    fn test_details_have_one_row_per_month() {
        let mut input = MortgageToRentInput::new(dec!(1_200_000), dec!(12));
        input.duration = 24;
        let out = run(&input);
        assert_eq!(out.details.len(), 24);
        assert_eq!(out.details[0].month, 1);
        assert_eq!(out.details[23].month, 24);
        assert_eq!(out.details[23].cumulative_total, out.total_cost);
    }

    #[test]
    fn test_interest_rate_column_is_linear_ramp() {
        let mut input = MortgageToRentInput::new(dec!(1_000_000), dec!(24));
        input.duration = 12;
        let out = run(&input);
        assert_eq!(out.details[0].interest_rate, dec!(2));
        assert_eq!(out.details[5].interest_rate, dec!(12));
        assert_eq!(out.details[11].interest_rate, dec!(24));
    }

    #[test]
    fn test_inflation_compounds_monthly() {
        let mut input = MortgageToRentInput::new(dec!(1_000_000), dec!(12));
        input.inflation_rate = dec!(12);
        input.options.include_inflation = true;
        let out = run(&input);
        // month 1 unadjusted, month 2 grows by 1%
        assert_eq!(out.details[0].rent, dec!(10_000));
        assert_eq!(out.details[1].rent, dec!(10_100));
        assert_eq!(out.details[2].rent, dec!(10_201));
        // headline rent stays unadjusted
        assert_eq!(out.monthly_rent, dec!(10_000));
        assert!(out.total_cost > dec!(120_000));
    }

    #[test]
    fn test_projection_only_when_requested() {
        let input = MortgageToRentInput::new(dec!(1_000_000), dec!(12));
        assert!(run(&input).projection.is_none());

        let mut input = input;
        input.options.calculate_projection = true;
        input.options.year_count = 3;
        let projection = run(&input).projection.unwrap();
        assert_eq!(projection.len(), 3);
        assert_eq!(projection[0].annual_rent, dec!(120_000));
        assert_eq!(projection[2].cumulative_rent, dec!(360_000));
    }

    #[test]
    fn test_projection_continues_inflation_curve() {
        let mut input = MortgageToRentInput::new(dec!(1_000_000), dec!(12));
        input.inflation_rate = dec!(12);
        input.options.include_inflation = true;
        input.options.calculate_projection = true;
        input.options.year_count = 2;
        let out = run(&input);
        let projection = out.projection.unwrap();

        // Year 1 covers the same twelve months as the breakdown.
        assert_eq!(projection[0].annual_rent, out.total_cost);
        assert_eq!(projection[0].annual_rent, dec!(126_825));
        // Year 2 starts at month 13: 126,825.03 * 1.01^12
        assert_eq!(projection[1].annual_rent, dec!(142_910));
        assert_eq!(projection[1].cumulative_rent, dec!(269_735));
    }

    #[test]
    fn test_oversized_deposit_reports_overflow() {
        // 1e24 * (1e9% / 1200) does not fit in a Decimal
        let deposit = Decimal::from_i128_with_scale(10i128.pow(24), 0);
        let err = calculate_mortgage_to_rent(&MortgageToRentInput::new(deposit, dec!(1_000_000_000)))
            .unwrap_err();
        assert!(matches!(err, RealtyFinanceError::Overflow { .. }), "{err:?}");
    }

    #[test]
    fn test_savings_ratio_override() {
        let mut input = MortgageToRentInput::new(dec!(1_000_000), dec!(12));
        input.assumptions.savings_ratio = dec!(0.5);
        let out = run(&input);
        assert_eq!(out.savings, dec!(500_000));
        assert_eq!(out.decision, Decision::Rent);
    }

    #[test]
    fn test_validation_rejects_non_positive_inputs() {
        assert!(calculate_mortgage_to_rent(&MortgageToRentInput::new(dec!(0), dec!(12))).is_err());
        assert!(calculate_mortgage_to_rent(&MortgageToRentInput::new(dec!(100), dec!(0))).is_err());
        let mut input = MortgageToRentInput::new(dec!(100), dec!(12));
        input.duration = 0;
        assert!(calculate_mortgage_to_rent(&input).is_err());
    }

    #[test]
    fn test_high_rate_warns() {
        let out = calculate_mortgage_to_rent(&MortgageToRentInput::new(dec!(1000), dec!(150))).unwrap();
        assert_eq!(out.warnings.len(), 1);
    }
}
