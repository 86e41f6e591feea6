//! The position ledger: cash plus share counts for one portfolio, and the
//! fold that derives them from the transaction log.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::transactions_errors::TransactionError;
use super::transactions_model::{
    PortfolioSnapshot, PositionView, Transaction, TransactionKind,
};
use crate::constants::DECIMAL_PRECISION;

/// Cash balance and positions for one portfolio.
///
/// All mutations are all-or-nothing: a failed operation leaves the state
/// untouched. Invariants: cash >= 0; every position entry holds > 0 shares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    cash: Decimal,
    positions: BTreeMap<String, u64>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }

    pub fn shares_of(&self, symbol: &str) -> u64 {
        self.positions.get(symbol).copied().unwrap_or(0)
    }

    pub fn held_symbols(&self) -> Vec<String> {
        self.positions.keys().cloned().collect()
    }

    /// Debits `shares * price` and increments the position.
    /// Returns the signed cash delta on success.
    pub fn apply_buy(
        &mut self,
        symbol: &str,
        shares: u64,
        price: Decimal,
    ) -> Result<Decimal, TransactionError> {
        Self::require_positive_shares(shares)?;
        let cost = Self::order_value(symbol, shares, price)?;
        if cost > self.cash {
            return Err(TransactionError::InsufficientFunds {
                required: cost,
                available: self.cash,
            });
        }
        self.cash -= cost;
        *self.positions.entry(symbol.to_string()).or_insert(0) += shares;
        Ok(-cost)
    }

    /// Credits `shares * price` and decrements the position, dropping the
    /// entry when it reaches zero. Selling more than held is rejected
    /// outright, never clamped.
    pub fn apply_sell(
        &mut self,
        symbol: &str,
        shares: u64,
        price: Decimal,
    ) -> Result<Decimal, TransactionError> {
        Self::require_positive_shares(shares)?;
        let held = *self
            .positions
            .get(symbol)
            .ok_or_else(|| TransactionError::UnknownPosition(symbol.to_string()))?;
        if shares > held {
            return Err(TransactionError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: shares,
                held,
            });
        }
        let proceeds = Self::order_value(symbol, shares, price)?;
        self.credit_cash(proceeds)?;
        if shares == held {
            self.positions.remove(symbol);
        } else {
            self.positions.insert(symbol.to_string(), held - shares);
        }
        Ok(proceeds)
    }

    pub fn apply_deposit(&mut self, amount: Decimal) -> Result<Decimal, TransactionError> {
        Self::require_positive_amount(amount)?;
        self.credit_cash(amount)?;
        Ok(amount)
    }

    pub fn apply_withdraw(&mut self, amount: Decimal) -> Result<Decimal, TransactionError> {
        Self::require_positive_amount(amount)?;
        if amount > self.cash {
            return Err(TransactionError::InsufficientFunds {
                required: amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(-amount)
    }

    /// Rebuilds ledger state by folding transaction records in order.
    ///
    /// Records were validated when committed, so the fold applies their
    /// recorded deltas directly.
    pub fn replay(transactions: &[Transaction]) -> Self {
        let mut state = Self::new();
        for transaction in transactions {
            state.cash += transaction.amount;
            match transaction.kind {
                TransactionKind::StockBuy => {
                    if let (Some(symbol), Some(shares)) =
                        (&transaction.symbol, transaction.shares)
                    {
                        *state.positions.entry(symbol.clone()).or_insert(0) += shares;
                    }
                }
                TransactionKind::StockSell => {
                    if let (Some(symbol), Some(shares)) =
                        (&transaction.symbol, transaction.shares)
                    {
                        let held = state.shares_of(symbol);
                        let remaining = held.saturating_sub(shares);
                        if remaining == 0 {
                            state.positions.remove(symbol);
                        } else {
                            state.positions.insert(symbol.clone(), remaining);
                        }
                    }
                }
                TransactionKind::CashDeposit | TransactionKind::CashWithdraw => {}
            }
        }
        state
    }

    pub fn snapshot(&self, portfolio_id: &str) -> PortfolioSnapshot {
        PortfolioSnapshot {
            portfolio_id: portfolio_id.to_string(),
            cash: self.cash,
            positions: self
                .positions
                .iter()
                .map(|(symbol, shares)| PositionView {
                    symbol: symbol.clone(),
                    shares: *shares,
                })
                .collect(),
        }
    }

    /// Computes `shares * price` without panicking on overflow.
    fn order_value(
        symbol: &str,
        shares: u64,
        price: Decimal,
    ) -> Result<Decimal, TransactionError> {
        Decimal::from(shares)
            .checked_mul(price)
            .map(|value| value.round_dp(DECIMAL_PRECISION))
            .ok_or_else(|| {
                TransactionError::InvalidQuantity(format!(
                    "order value for {} overflows the supported range",
                    symbol
                ))
            })
    }

    fn credit_cash(&mut self, amount: Decimal) -> Result<(), TransactionError> {
        self.cash = self.cash.checked_add(amount).ok_or_else(|| {
            TransactionError::InvalidQuantity(
                "cash balance overflows the supported range".to_string(),
            )
        })?;
        Ok(())
    }

    fn require_positive_shares(shares: u64) -> Result<(), TransactionError> {
        if shares == 0 {
            return Err(TransactionError::InvalidQuantity(
                "share count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn require_positive_amount(amount: Decimal) -> Result<(), TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidQuantity(
                "cash amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
