use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::market_data_model::{NewQuote, Quote};
use crate::errors::Result;

/// Trait defining the contract for price series storage.
///
/// Appends are serialized per symbol; reads may run concurrently.
pub trait MarketDataRepositoryTrait: Send + Sync {
    /// Appends a quote. The timestamp must be strictly later than the
    /// latest stored observation for the symbol.
    fn append(&self, quote: Quote) -> Result<Quote>;
    /// Inserts an out-of-order manual correction at its timestamp position.
    /// Timestamp uniqueness per symbol is still enforced.
    fn insert_correction(&self, quote: Quote) -> Result<Quote>;
    fn latest(&self, symbol: &str) -> Result<Quote>;
    fn latest_for_symbols(&self, symbols: &[String]) -> Result<HashMap<String, Quote>>;
    fn history(&self, symbol: &str) -> Result<Vec<Quote>>;
    fn history_range(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Quote>>;
}

/// Trait defining the contract for market data operations.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    fn add_quote(&self, new_quote: NewQuote) -> Result<Quote>;
    fn add_correction(&self, new_quote: NewQuote) -> Result<Quote>;
    fn get_latest_quote(&self, symbol: &str) -> Result<Quote>;
    fn get_latest_quotes(&self, symbols: &[String]) -> Result<HashMap<String, Quote>>;
    fn get_history(&self, symbol: &str) -> Result<Vec<Quote>>;
    fn get_history_range(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Quote>>;
    /// Pulls fresh observations for the symbol from the external feed and
    /// appends the ones newer than the stored series. Returns the number
    /// of appended observations.
    async fn sync_symbol(&self, symbol: &str) -> Result<usize>;
}
