use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::valuation_errors::ValuationError;
use super::valuation_model::{PortfolioValuation, PositionValuation};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::market_data::{MarketDataServiceTrait, Quote};
use crate::transactions::{PortfolioSnapshot, TransactionServiceTrait};

/// Values a ledger snapshot against a set of latest quotes.
///
/// Pure: no lookups, no side effects. Every held symbol must have a quote;
/// a missing one fails with `PriceUnavailable` instead of valuing at zero.
pub fn value_snapshot(
    snapshot: &PortfolioSnapshot,
    latest_quotes: &HashMap<String, Quote>,
) -> std::result::Result<PortfolioValuation, ValuationError> {
    let mut positions = Vec::with_capacity(snapshot.positions.len());
    let mut total_value = snapshot.cash;

    for position in &snapshot.positions {
        let quote = latest_quotes
            .get(&position.symbol)
            .ok_or_else(|| ValuationError::PriceUnavailable(position.symbol.clone()))?;
        let market_value =
            (Decimal::from(position.shares) * quote.close).round_dp(DECIMAL_PRECISION);
        total_value += market_value;
        positions.push(PositionValuation {
            symbol: position.symbol.clone(),
            shares: position.shares,
            price: quote.close,
            price_timestamp: quote.timestamp,
            market_value,
        });
    }

    Ok(PortfolioValuation {
        portfolio_id: snapshot.portfolio_id.clone(),
        cash: snapshot.cash,
        positions,
        total_value,
    })
}

pub trait ValuationServiceTrait: Send + Sync {
    fn get_valuation(&self, portfolio_id: &str) -> Result<PortfolioValuation>;
}

/// Service wiring the pure valuation over the current snapshot and latest
/// quotes.
pub struct ValuationService {
    transactions: Arc<dyn TransactionServiceTrait>,
    market_data: Arc<dyn MarketDataServiceTrait>,
}

impl ValuationService {
    pub fn new(
        transactions: Arc<dyn TransactionServiceTrait>,
        market_data: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            transactions,
            market_data,
        }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn get_valuation(&self, portfolio_id: &str) -> Result<PortfolioValuation> {
        let snapshot = self.transactions.get_snapshot(portfolio_id)?;
        let symbols: Vec<String> = snapshot
            .positions
            .iter()
            .map(|p| p.symbol.clone())
            .collect();
        let latest_quotes = self.market_data.get_latest_quotes(&symbols)?;
        Ok(value_snapshot(&snapshot, &latest_quotes)?)
    }
}
