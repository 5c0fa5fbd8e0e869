use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use realty_finance_core::comparison::{
    compare_mortgage_options, ComparisonInput, FinancingOptionInput, FinancingType,
};
use realty_finance_core::Assumptions;

use super::apply_assumptions;
use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OptionKind {
    Rent,
    Mortgage,
}

impl From<OptionKind> for FinancingType {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Rent => FinancingType::Rent,
            OptionKind::Mortgage => FinancingType::Mortgage,
        }
    }
}

/// Arguments for a two-option comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// First option type
    #[arg(long)]
    pub type1: Option<OptionKind>,

    /// First option amount (monthly rent or loan principal)
    #[arg(long)]
    pub amount1: Option<Decimal>,

    /// First option annual rate in percent (mortgage only)
    #[arg(long, default_value = "0")]
    pub rate1: Decimal,

    /// First option term in months (mortgage only)
    #[arg(long)]
    pub term1: Option<u32>,

    /// Second option type
    #[arg(long)]
    pub type2: Option<OptionKind>,

    /// Second option amount
    #[arg(long)]
    pub amount2: Option<Decimal>,

    /// Second option annual rate in percent
    #[arg(long, default_value = "0")]
    pub rate2: Decimal,

    /// Second option term in months
    #[arg(long)]
    pub term2: Option<u32>,

    /// Comparison horizon in months
    #[arg(long, default_value = "60")]
    pub period: u32,

    /// YAML or JSON file overriding the default heuristics
    #[arg(long)]
    pub assumptions: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut cmp_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(type1), Some(amount1), Some(type2), Some(amount2)) =
        (args.type1, args.amount1, args.type2, args.amount2)
    {
        ComparisonInput {
            option1: FinancingOptionInput {
                kind: type1.into(),
                amount: amount1,
                interest_rate: args.rate1,
                term_months: args.term1,
            },
            option2: FinancingOptionInput {
                kind: type2.into(),
                amount: amount2,
                interest_rate: args.rate2,
                term_months: args.term2,
            },
            comparison_period_months: args.period,
            assumptions: Assumptions::default(),
        }
    } else if let Some(data) = input::read_piped()? {
        data
    } else {
        return Err(
            "--input <file.json>, --type1/--amount1/--type2/--amount2 or stdin required".into(),
        );
    };

    apply_assumptions(args.assumptions.as_deref(), &mut cmp_input.assumptions)?;
    let result = compare_mortgage_options(&cmp_input)?;
    Ok(serde_json::to_value(result)?)
}
