pub mod config;
pub mod error;
pub mod time_value;
pub mod types;

mod validation;

#[cfg(feature = "conversion")]
pub mod conversion;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "affordability")]
pub mod affordability;

#[cfg(feature = "market_rates")]
pub mod market;

pub use config::Assumptions;
pub use error::RealtyFinanceError;
pub use types::*;

/// Standard result type for all realty-finance operations
pub type RealtyFinanceResult<T> = Result<T, RealtyFinanceError>;
