//! Market data domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market_data_constants::{DATA_SOURCE_FEED, DATA_SOURCE_MANUAL};

/// Represents the source of a price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    /// Pulled from the external market data feed
    Feed,
    /// Manual entry or correction
    #[default]
    Manual,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Feed => DATA_SOURCE_FEED,
            DataSource::Manual => DATA_SOURCE_MANUAL,
        }
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            DATA_SOURCE_FEED => DataSource::Feed,
            _ => DataSource::Manual,
        }
    }
}

/// A stored OHLCV price observation for one symbol at one point in time.
///
/// Observations are append-only; per symbol the series is kept ordered by
/// timestamp with unique timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub data_source: DataSource,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a price observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl NewQuote {
    pub fn into_quote(self, data_source: DataSource) -> Quote {
        Quote {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: self.symbol,
            timestamp: self.timestamp,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            data_source,
            created_at: Utc::now(),
        }
    }
}
