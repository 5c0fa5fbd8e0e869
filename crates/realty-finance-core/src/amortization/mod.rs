pub mod schedule;

pub use schedule::{
    amortize, generate_amortization_schedule, AmortizationInput, AmortizationOutput,
    AmortizationRow, AmortizationSummary,
};
