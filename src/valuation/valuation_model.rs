//! Valuation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market value of one held position at the latest known price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub shares: u64,
    pub price: Decimal,
    pub price_timestamp: DateTime<Utc>,
    pub market_value: Decimal,
}

/// Full portfolio valuation: cash plus every position at market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub portfolio_id: String,
    pub cash: Decimal,
    pub positions: Vec<PositionValuation>,
    pub total_value: Decimal,
}
