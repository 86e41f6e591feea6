use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::market_data_model::NewQuote;
use crate::errors::Result;

/// Contract for the external market data feed.
///
/// The engine does not implement any concrete provider; callers plug in
/// their own (HTTP client, broker API, fixture data in tests).
#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    /// Fetches observations for a symbol, optionally only those after
    /// `since`. Returned observations may overlap the stored series; the
    /// service filters them before appending.
    async fn fetch_history(
        &self,
        symbol: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<NewQuote>>;
}
