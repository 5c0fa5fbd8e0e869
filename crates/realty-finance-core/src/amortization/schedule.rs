//! Fixed-rate amortization schedules with optional extra principal.
//!
//! Rows are reported in whole currency units. Interest and the remaining
//! balance are rounded; principal is the drop in the rounded balance and the
//! payment is principal plus interest, so every row reconciles exactly and
//! the last row absorbs any rounding remainder.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{checked_product, checked_sum, level_payment, monthly_rate};
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::{validation, RealtyFinanceResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Remaining balance that would round away to zero; folded into the
/// current row instead of producing an empty trailing row.
const ROUNDING_RESIDUAL: Decimal = dec!(0.5);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    pub loan_amount: Money,
    /// Annual interest rate as a percentage. Zero is allowed.
    pub interest_rate: Percent,
    pub term_months: u32,
    /// Extra principal paid every period on top of the level payment.
    #[serde(default)]
    pub additional_payment: Money,
}

/// A single period of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSummary {
    /// Level payment before any additional principal.
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub payoff_months: u32,
    /// Months cut from the term by the additional payment.
    pub months_saved: u32,
    /// Interest avoided compared with the schedule without extra principal.
    pub interest_saved: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub summary: AmortizationSummary,
    pub schedule: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the month-by-month schedule for a fixed-rate loan.
///
/// The schedule ends at `term_months`, or earlier once `additional_payment`
/// retires the balance.
pub fn generate_amortization_schedule(
    loan_amount: Money,
    interest_rate: Percent,
    term_months: u32,
    additional_payment: Money,
) -> RealtyFinanceResult<Vec<AmortizationRow>> {
    validation::positive("loan_amount", loan_amount)?;
    validation::non_negative("interest_rate", interest_rate)?;
    validation::months("term_months", term_months)?;
    validation::non_negative("additional_payment", additional_payment)?;

    let rate = monthly_rate(interest_rate);
    let payment = level_payment(loan_amount, rate, term_months)?;
    build_schedule(loan_amount, rate, term_months, payment, additional_payment)
}

/// Schedule plus payoff summary, wrapped in the computation envelope.
pub fn amortize(
    input: &AmortizationInput,
) -> RealtyFinanceResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = generate_amortization_schedule(
        input.loan_amount,
        input.interest_rate,
        input.term_months,
        input.additional_payment,
    )?;

    let rate = monthly_rate(input.interest_rate);
    let payment = level_payment(input.loan_amount, rate, input.term_months)?;

    if input.interest_rate.is_zero() {
        warnings.push("Zero interest rate: payments are equal slices of principal".into());
    }
    if input.additional_payment >= input.loan_amount {
        warnings.push("Additional payment retires the loan in the first month".into());
    }

    let total_interest = total(schedule.iter().map(|r| r.interest), "total interest")?;
    let total_paid = total(schedule.iter().map(|r| r.payment), "total paid")?;
    let payoff_months = schedule.len() as u32;

    let interest_saved = if input.additional_payment > Decimal::ZERO {
        let baseline = build_schedule(input.loan_amount, rate, input.term_months, payment, Decimal::ZERO)?;
        total(baseline.iter().map(|r| r.interest), "baseline interest")? - total_interest
    } else {
        Decimal::ZERO
    };

    tracing::debug!(
        %payment,
        payoff_months,
        %total_interest,
        "amortization schedule built"
    );

    let output = AmortizationOutput {
        summary: AmortizationSummary {
            monthly_payment: round_money(payment),
            total_paid,
            total_interest,
            payoff_months,
            months_saved: input.term_months - payoff_months,
            interest_saved,
        },
        schedule,
    };

    let methodology = if input.additional_payment > Decimal::ZERO {
        "Fixed-rate level-payment amortization with additional principal"
    } else {
        "Fixed-rate level-payment amortization"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_schedule(
    loan_amount: Money,
    rate: Rate,
    term_months: u32,
    payment: Money,
    additional_payment: Money,
) -> RealtyFinanceResult<Vec<AmortizationRow>> {
    let mut rows = Vec::with_capacity(term_months as usize);
    let mut balance = loan_amount;
    let mut reported_balance = round_money(loan_amount);

    for month in 1..=term_months {
        if balance <= Decimal::ZERO {
            break;
        }

        let interest = checked_product(balance, rate, "monthly interest")?;
        let mut principal = checked_sum(payment - interest, additional_payment, "principal paid")?;
        if month == term_months || principal >= balance - ROUNDING_RESIDUAL {
            principal = balance;
        }
        balance -= principal;

        let interest = round_money(interest);
        let remaining_balance = round_money(balance);
        let principal = reported_balance - remaining_balance;
        reported_balance = remaining_balance;

        rows.push(AmortizationRow {
            month,
            payment: principal + interest,
            principal,
            interest,
            remaining_balance,
        });
    }

    Ok(rows)
}

fn total(mut values: impl Iterator<Item = Money>, context: &str) -> RealtyFinanceResult<Money> {
    values.try_fold(Decimal::ZERO, |acc, v| checked_sum(acc, v, context))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
