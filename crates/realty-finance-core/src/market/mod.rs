pub mod rates;

pub use rates::{market_rate, market_rates, MarketRateEntry};
