use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::HashMap;

use super::market_data_errors::MarketDataError;
use super::market_data_model::Quote;
use super::market_data_traits::MarketDataRepositoryTrait;
use crate::errors::Result;

/// In-memory price series store.
///
/// Each symbol maps to a timestamp-ordered vector of quotes. The DashMap
/// entry lock serializes appends per symbol without blocking other symbols.
#[derive(Default)]
pub struct InMemoryQuoteRepository {
    series: DashMap<String, Vec<Quote>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarketDataRepositoryTrait for InMemoryQuoteRepository {
    fn append(&self, quote: Quote) -> Result<Quote> {
        let mut entry = self.series.entry(quote.symbol.clone()).or_default();
        if let Some(last) = entry.last() {
            if quote.timestamp <= last.timestamp {
                return Err(MarketDataError::OutOfOrder {
                    symbol: quote.symbol,
                    timestamp: quote.timestamp,
                }
                .into());
            }
        }
        entry.push(quote.clone());
        Ok(quote)
    }

    fn insert_correction(&self, quote: Quote) -> Result<Quote> {
        let mut entry = self.series.entry(quote.symbol.clone()).or_default();
        match entry.binary_search_by(|q| q.timestamp.cmp(&quote.timestamp)) {
            // Timestamp uniqueness per symbol also binds corrections.
            Ok(_) => Err(MarketDataError::OutOfOrder {
                symbol: quote.symbol,
                timestamp: quote.timestamp,
            }
            .into()),
            Err(position) => {
                entry.insert(position, quote.clone());
                Ok(quote)
            }
        }
    }

    fn latest(&self, symbol: &str) -> Result<Quote> {
        self.series
            .get(symbol)
            .and_then(|entry| entry.last().cloned())
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()).into())
    }

    fn latest_for_symbols(&self, symbols: &[String]) -> Result<HashMap<String, Quote>> {
        let mut latest = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            if let Some(quote) = self.series.get(symbol).and_then(|e| e.last().cloned()) {
                latest.insert(symbol.clone(), quote);
            }
        }
        Ok(latest)
    }

    fn history(&self, symbol: &str) -> Result<Vec<Quote>> {
        Ok(self
            .series
            .get(symbol)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn history_range(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Quote>> {
        Ok(self
            .series
            .get(symbol)
            .map(|entry| {
                entry
                    .iter()
                    .filter(|q| q.timestamp >= from && q.timestamp <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
