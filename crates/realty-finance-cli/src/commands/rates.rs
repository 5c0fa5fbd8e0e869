use clap::Args;
use serde::Serialize;
use serde_json::Value;

use realty_finance_core::market::{market_rate, market_rates, MarketRateEntry};

/// Arguments for the market rate table
#[derive(Args)]
pub struct RatesArgs {
    /// Show a single city
    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
struct CityRates {
    city: String,
    #[serde(flatten)]
    rates: MarketRateEntry,
}

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(city) = args.city {
        let rates = market_rate(&city)?;
        return Ok(serde_json::to_value(CityRates { city, rates })?);
    }

    let rows: Vec<CityRates> = market_rates()
        .into_iter()
        .map(|(city, rates)| CityRates {
            city: city.to_string(),
            rates,
        })
        .collect();
    Ok(serde_json::to_value(rows)?)
}
