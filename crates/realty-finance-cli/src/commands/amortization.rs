use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use realty_finance_core::amortization::{amortize, AmortizationInput};

use super::resolve_rate;
use crate::input;

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct AmortizationArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual interest rate in percent (0 allowed)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Pre-fill the mortgage rate from the market table
    #[arg(long)]
    pub city: Option<String>,

    /// Loan term in months
    #[arg(long, default_value = "360")]
    pub term_months: u32,

    /// Extra principal paid every month
    #[arg(long, default_value = "0")]
    pub additional_payment: Decimal,
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let am_input: AmortizationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(loan_amount) = args.loan_amount {
        AmortizationInput {
            loan_amount,
            interest_rate: resolve_rate(
                args.interest_rate,
                args.city.as_deref(),
                |r| r.mortgage_rate,
                "interest-rate",
            )?,
            term_months: args.term_months,
            additional_payment: args.additional_payment,
        }
    } else if let Some(data) = input::read_piped()? {
        data
    } else {
        return Err("--input <file.json>, --loan-amount or stdin required".into());
    };

    let result = amortize(&am_input)?;
    Ok(serde_json::to_value(result)?)
}
