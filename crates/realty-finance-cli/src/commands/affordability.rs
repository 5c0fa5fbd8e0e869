use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use realty_finance_core::affordability::{calculate_affordability, AffordabilityInput};
use realty_finance_core::Assumptions;

use super::{apply_assumptions, resolve_rate};
use crate::input;

/// Arguments for affordability analysis
#[derive(Args)]
pub struct AffordabilityArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly household income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Monthly household expenses
    #[arg(long, default_value = "0")]
    pub monthly_expenses: Decimal,

    /// Cash available for a down payment
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Annual mortgage rate in percent
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Pre-fill the mortgage rate from the market table
    #[arg(long)]
    pub city: Option<String>,

    /// Maximum debt-to-income ratio in percent
    #[arg(long, default_value = "30")]
    pub max_debt_ratio: Decimal,

    /// YAML or JSON file overriding the default heuristics
    #[arg(long)]
    pub assumptions: Option<String>,
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut aff_input: AffordabilityInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(monthly_income) = args.monthly_income {
        AffordabilityInput {
            monthly_income,
            monthly_expenses: args.monthly_expenses,
            down_payment_available: args.down_payment,
            interest_rate: resolve_rate(
                args.interest_rate,
                args.city.as_deref(),
                |r| r.mortgage_rate,
                "interest-rate",
            )?,
            max_debt_ratio: args.max_debt_ratio,
            assumptions: Assumptions::default(),
        }
    } else if let Some(data) = input::read_piped()? {
        data
    } else {
        return Err("--input <file.json>, --monthly-income or stdin required".into());
    };

    apply_assumptions(args.assumptions.as_deref(), &mut aff_input.assumptions)?;
    let result = calculate_affordability(&aff_input)?;
    Ok(serde_json::to_value(result)?)
}
