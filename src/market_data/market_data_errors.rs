use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Out of order observation for {symbol} at {timestamp}")]
    OutOfOrder {
        symbol: String,
        timestamp: DateTime<Utc>,
    },

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
