pub mod options;

pub use options::{
    compare_mortgage_options, BetterOption, ComparisonInput, ComparisonResult, FinancingOptionInput,
    FinancingType, MortgageOption,
};
