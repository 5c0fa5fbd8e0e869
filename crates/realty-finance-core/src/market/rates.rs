//! Reference rates by city, for pre-filling calculator inputs.
//!
//! Static data only. None of the calculators read this table.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RealtyFinanceError;
use crate::types::Percent;
use crate::RealtyFinanceResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRateEntry {
    /// Annual deposit-to-rent conversion rate, percent.
    pub rent_rate: Percent,
    /// Annual bank mortgage rate, percent.
    pub mortgage_rate: Percent,
    /// Annual property appreciation, percent.
    pub appreciation: Percent,
}

const fn entry(rent_rate: Percent, mortgage_rate: Percent, appreciation: Percent) -> MarketRateEntry {
    MarketRateEntry {
        rent_rate,
        mortgage_rate,
        appreciation,
    }
}

static MARKET_RATES: &[(&str, MarketRateEntry)] = &[
    ("Tehran", entry(dec!(36), dec!(23), dec!(35))),
    ("Karaj", entry(dec!(34), dec!(23), dec!(32))),
    ("Isfahan", entry(dec!(32), dec!(23), dec!(30))),
    ("Shiraz", entry(dec!(32), dec!(23), dec!(30))),
    ("Mashhad", entry(dec!(30), dec!(23), dec!(28))),
    ("Tabriz", entry(dec!(28), dec!(23), dec!(25))),
    ("Qom", entry(dec!(27), dec!(23), dec!(24))),
    ("Ahvaz", entry(dec!(26), dec!(23), dec!(22))),
];

/// The whole table, keyed by city name.
pub fn market_rates() -> BTreeMap<&'static str, MarketRateEntry> {
    MARKET_RATES.iter().copied().collect()
}

/// Rates for one city. Matching ignores case and surrounding whitespace.
pub fn market_rate(city: &str) -> RealtyFinanceResult<MarketRateEntry> {
    let wanted = city.trim();
    MARKET_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        .map(|(_, rates)| *rates)
        .ok_or_else(|| RealtyFinanceError::UnknownCity(wanted.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_every_city() {
        let rates = market_rates();
        assert_eq!(rates.len(), MARKET_RATES.len());
        assert!(rates.contains_key("Tehran"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let rates = market_rate("  tehran ").unwrap();
        assert_eq!(rates.rent_rate, dec!(36));
        assert_eq!(rates.appreciation, dec!(35));
    }

    #[test]
    fn test_unknown_city() {
        assert!(matches!(
            market_rate("Atlantis"),
            Err(RealtyFinanceError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_rates_are_positive() {
        for (city, rates) in market_rates() {
            assert!(rates.rent_rate > Percent::ZERO, "{city}");
            assert!(rates.mortgage_rate > Percent::ZERO, "{city}");
        }
    }
}
