pub mod affordability;
pub mod amortization;
pub mod comparison;
pub mod conversion;
pub mod rates;

use realty_finance_core::market::{market_rate, MarketRateEntry};
use realty_finance_core::{Assumptions, Percent};

use crate::input;

/// Use the explicit rate if given, otherwise pre-fill it from the city table.
pub fn resolve_rate(
    explicit: Option<Percent>,
    city: Option<&str>,
    pick: impl Fn(&MarketRateEntry) -> Percent,
    what: &str,
) -> Result<Percent, Box<dyn std::error::Error>> {
    match (explicit, city) {
        (Some(rate), _) => Ok(rate),
        (None, Some(city)) => {
            let rate = pick(&market_rate(city)?);
            tracing::info!(city, %rate, what, "rate pre-filled from market table");
            Ok(rate)
        }
        (None, None) => Err(format!("--{what} or --city required").into()),
    }
}

/// Load `--assumptions` if given, otherwise keep what the input carried.
pub fn apply_assumptions(
    path: Option<&str>,
    current: &mut Assumptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        *current = input::file::read_assumptions(path)?;
    }
    Ok(())
}
