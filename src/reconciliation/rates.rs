//! Exchange rate lookup over the claim's currency entries

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::types::ExchangeRate;

/// Lookup table of destination currency to exchange rate
///
/// Built from the currency-entry step's records. Lookups are exact and
/// case-sensitive against the stored code; callers are responsible for
/// trimming line-item currency codes first. Lookups never fail: a missing
/// currency resolves to an explicit caller-supplied default, 0 when absence
/// should zero out a contribution and 1 when it should mean "no conversion".
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<String, BigDecimal>,
}

impl ExchangeRateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from currency entries; later entries replace earlier
    /// ones for the same currency
    pub fn from_entries(entries: &[ExchangeRate]) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.destination_currency.clone(), entry.rate.clone());
        }
        table
    }

    /// Set the rate for a currency, replacing any previous rate
    pub fn insert(&mut self, destination_currency: String, rate: BigDecimal) {
        self.rates.insert(destination_currency, rate);
    }

    /// Look up the rate for a currency, if one was captured
    pub fn rate(&self, currency: &str) -> Option<&BigDecimal> {
        self.rates.get(currency)
    }

    /// Look up the rate for a currency, falling back to `default`
    pub fn rate_or(&self, currency: &str, default: BigDecimal) -> BigDecimal {
        self.rates.get(currency).cloned().unwrap_or(default)
    }

    /// Number of currencies with a captured rate
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn table() -> ExchangeRateTable {
        ExchangeRateTable::from_entries(&[
            ExchangeRate::new("USD".to_string(), BigDecimal::from(80)),
            ExchangeRate::new("EUR".to_string(), BigDecimal::from_str("88.5").unwrap()),
        ])
    }

    #[test]
    fn exact_match_lookup() {
        let table = table();
        assert_eq!(table.rate("USD"), Some(&BigDecimal::from(80)));
        // Case-sensitive, non-trimmed match only
        assert_eq!(table.rate("usd"), None);
        assert_eq!(table.rate(" USD"), None);
    }

    #[test]
    fn missing_currency_uses_explicit_default() {
        let table = table();
        assert_eq!(table.rate_or("JPY", BigDecimal::from(0)), BigDecimal::from(0));
        assert_eq!(table.rate_or("JPY", BigDecimal::from(1)), BigDecimal::from(1));
        assert_eq!(table.rate_or("USD", BigDecimal::from(1)), BigDecimal::from(80));
    }

    #[test]
    fn later_entries_replace_earlier_by_currency() {
        let table = ExchangeRateTable::from_entries(&[
            ExchangeRate::new("USD".to_string(), BigDecimal::from(79)),
            ExchangeRate::new("USD".to_string(), BigDecimal::from(81)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rate("USD"), Some(&BigDecimal::from(81)));
    }
}
