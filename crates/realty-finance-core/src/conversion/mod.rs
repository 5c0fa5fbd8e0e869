//! Deposit ⇄ rent conversions.

pub mod mortgage_to_rent;
pub mod rent_to_mortgage;

pub use mortgage_to_rent::{
    calculate_mortgage_to_rent, MortgageCalculationResult, MortgageToRentInput,
    MortgageToRentOptions,
};
pub use rent_to_mortgage::{
    calculate_rent_to_mortgage, RentCalculationResult, RentToMortgageInput, RentToMortgageOptions,
};
