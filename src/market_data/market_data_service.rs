use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{DataSource, NewQuote, Quote};
use super::market_data_provider::MarketDataProviderTrait;
use super::market_data_traits::{MarketDataRepositoryTrait, MarketDataServiceTrait};
use crate::errors::Result;

/// Service for recording and reading price observations.
pub struct MarketDataService {
    repository: Arc<dyn MarketDataRepositoryTrait>,
    provider: Arc<dyn MarketDataProviderTrait>,
}

impl MarketDataService {
    pub fn new(
        repository: Arc<dyn MarketDataRepositoryTrait>,
        provider: Arc<dyn MarketDataProviderTrait>,
    ) -> Self {
        Self {
            repository,
            provider,
        }
    }

    fn validate(new_quote: &NewQuote) -> Result<()> {
        if new_quote.symbol.trim().is_empty() {
            return Err(MarketDataError::InvalidData("symbol is empty".to_string()).into());
        }
        if new_quote.close.is_sign_negative()
            || new_quote.open.is_sign_negative()
            || new_quote.high.is_sign_negative()
            || new_quote.low.is_sign_negative()
        {
            return Err(MarketDataError::InvalidData(format!(
                "negative price for {}",
                new_quote.symbol
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    fn add_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        Self::validate(&new_quote)?;
        self.repository.append(new_quote.into_quote(DataSource::Manual))
    }

    fn add_correction(&self, new_quote: NewQuote) -> Result<Quote> {
        Self::validate(&new_quote)?;
        let quote = new_quote.into_quote(DataSource::Manual);
        debug!(
            "Inserting manual correction for {} at {}",
            quote.symbol, quote.timestamp
        );
        self.repository.insert_correction(quote)
    }

    fn get_latest_quote(&self, symbol: &str) -> Result<Quote> {
        self.repository.latest(symbol)
    }

    fn get_latest_quotes(&self, symbols: &[String]) -> Result<HashMap<String, Quote>> {
        self.repository.latest_for_symbols(symbols)
    }

    fn get_history(&self, symbol: &str) -> Result<Vec<Quote>> {
        self.repository.history(symbol)
    }

    fn get_history_range(
        &self,
        symbol: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Quote>> {
        self.repository.history_range(symbol, from, to)
    }

    async fn sync_symbol(&self, symbol: &str) -> Result<usize> {
        let since = self.repository.latest(symbol).ok().map(|q| q.timestamp);
        let mut fetched = self.provider.fetch_history(symbol, since).await?;
        fetched.sort_by_key(|q| q.timestamp);

        let mut appended = 0usize;
        let mut cursor = since;
        for new_quote in fetched {
            if new_quote.symbol != symbol {
                warn!(
                    "Feed returned observation for {} while syncing {}. Skipping.",
                    new_quote.symbol, symbol
                );
                continue;
            }
            // Skip anything at or before what we already hold, and feed duplicates.
            if let Some(latest) = cursor {
                if new_quote.timestamp <= latest {
                    continue;
                }
            }
            cursor = Some(new_quote.timestamp);
            self.repository
                .append(new_quote.into_quote(DataSource::Feed))?;
            appended += 1;
        }

        info!("Synced {} observations for {}", appended, symbol);
        Ok(appended)
    }
}
