use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use realty_finance_core::conversion::{
    calculate_mortgage_to_rent, calculate_rent_to_mortgage, MortgageToRentInput,
    MortgageToRentOptions, RentToMortgageInput, RentToMortgageOptions,
};
use realty_finance_core::Assumptions;

use super::{apply_assumptions, resolve_rate};
use crate::input;

/// Arguments for deposit-to-rent conversion
#[derive(Args)]
pub struct MortgageToRentArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit (mortgage) amount
    #[arg(long)]
    pub mortgage_amount: Option<Decimal>,

    /// Annual conversion rate in percent (e.g. 25)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Pre-fill the conversion rate from the market table
    #[arg(long)]
    pub city: Option<String>,

    /// Months in the breakdown
    #[arg(long, default_value = "12")]
    pub duration: u32,

    /// Annual inflation in percent
    #[arg(long, default_value = "15")]
    pub inflation_rate: Decimal,

    /// Grow the rent monthly with inflation
    #[arg(long)]
    pub include_inflation: bool,

    /// Add a yearly rent projection
    #[arg(long)]
    pub projection: bool,

    /// Years in the projection
    #[arg(long, default_value = "5")]
    pub year_count: u32,

    /// YAML or JSON file overriding the default heuristics
    #[arg(long)]
    pub assumptions: Option<String>,
}

/// Arguments for rent-to-deposit conversion
#[derive(Args)]
pub struct RentToMortgageArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly rent
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Annual conversion rate in percent
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Pre-fill the conversion rate and appreciation from the market table
    #[arg(long)]
    pub city: Option<String>,

    /// Lease length in months
    #[arg(long, default_value = "12")]
    pub duration: u32,

    /// Annual property appreciation in percent
    #[arg(long)]
    pub property_appreciation: Option<Decimal>,

    /// Grow the annual rent with property appreciation
    #[arg(long)]
    pub include_property_growth: bool,

    /// Skip the break-even search
    #[arg(long)]
    pub no_break_even: bool,

    /// Years in the breakdown
    #[arg(long, default_value = "5")]
    pub year_count: u32,

    /// YAML or JSON file overriding the default heuristics
    #[arg(long)]
    pub assumptions: Option<String>,
}

pub fn run_mortgage_to_rent(args: MortgageToRentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut m2r_input: MortgageToRentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(mortgage_amount) = args.mortgage_amount {
        let interest_rate = resolve_rate(
            args.interest_rate,
            args.city.as_deref(),
            |r| r.rent_rate,
            "interest-rate",
        )?;
        MortgageToRentInput {
            mortgage_amount,
            interest_rate,
            duration: args.duration,
            inflation_rate: args.inflation_rate,
            options: MortgageToRentOptions {
                include_inflation: args.include_inflation,
                calculate_projection: args.projection,
                year_count: args.year_count,
            },
            assumptions: Assumptions::default(),
        }
    } else if let Some(data) = input::read_piped()? {
        data
    } else {
        return Err("--input <file.json>, --mortgage-amount or stdin required".into());
    };

    apply_assumptions(args.assumptions.as_deref(), &mut m2r_input.assumptions)?;
    let result = calculate_mortgage_to_rent(&m2r_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_rent_to_mortgage(args: RentToMortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut r2m_input: RentToMortgageInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(monthly_rent) = args.monthly_rent {
        let interest_rate = resolve_rate(
            args.interest_rate,
            args.city.as_deref(),
            |r| r.rent_rate,
            "interest-rate",
        )?;
        let property_appreciation = match (args.property_appreciation, args.city.as_deref()) {
            (None, None) => RentToMortgageInput::new(monthly_rent, interest_rate).property_appreciation,
            (explicit, city) => resolve_rate(explicit, city, |r| r.appreciation, "property-appreciation")?,
        };
        RentToMortgageInput {
            monthly_rent,
            interest_rate,
            duration: args.duration,
            property_appreciation,
            options: RentToMortgageOptions {
                include_property_growth: args.include_property_growth,
                calculate_break_even: !args.no_break_even,
                year_count: args.year_count,
            },
            assumptions: Assumptions::default(),
        }
    } else if let Some(data) = input::read_piped()? {
        data
    } else {
        return Err("--input <file.json>, --monthly-rent or stdin required".into());
    };

    apply_assumptions(args.assumptions.as_deref(), &mut r2m_input.assumptions)?;
    let result = calculate_rent_to_mortgage(&r2m_input)?;
    Ok(serde_json::to_value(result)?)
}
