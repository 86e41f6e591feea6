//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four supported operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    StockBuy,
    StockSell,
    CashDeposit,
    CashWithdraw,
}

/// An operation request against one portfolio.
///
/// One case per kind, each carrying only its relevant fields. Prices are
/// never part of a request; the coordinator resolves the current market
/// price itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionRequest {
    StockBuy { symbol: String, shares: u64 },
    StockSell { symbol: String, shares: u64 },
    CashDeposit { amount: Decimal },
    CashWithdraw { amount: Decimal },
}

/// Immutable record of one applied operation.
///
/// The transaction log is the authoritative source of truth for a
/// portfolio's ledger state; cached state must be rebuildable by replaying
/// these records in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub portfolio_id: String,
    pub kind: TransactionKind,
    pub symbol: Option<String>,
    pub shares: Option<u64>,
    /// Signed cash delta: negative for buys and withdrawals.
    pub amount: Decimal,
    /// Cash balance after this transaction was applied.
    pub cash_after: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// One held position within a snapshot. Entries always carry a share
/// count greater than zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub symbol: String,
    pub shares: u64,
}

/// Current cash and positions for one portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub portfolio_id: String,
    pub cash: Decimal,
    pub positions: Vec<PositionView>,
}
