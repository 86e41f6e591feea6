use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::ledger::LedgerState;
use super::transactions_model::{
    PortfolioSnapshot, Transaction, TransactionKind, TransactionRequest,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::market_data::MarketDataServiceTrait;
use crate::portfolios::PortfolioRepositoryTrait;

/// The transaction coordinator: the single entry point with authority to
/// mutate a portfolio's ledger.
///
/// Price resolution and ledger mutation run as one unit under the
/// portfolio's mutation lock, so concurrent operations on the same
/// portfolio serialize while different portfolios proceed independently.
pub struct TransactionService {
    portfolios: Arc<dyn PortfolioRepositoryTrait>,
    repository: Arc<dyn TransactionRepositoryTrait>,
    market_data: Arc<dyn MarketDataServiceTrait>,
    locks: DashMap<String, Arc<Mutex<()>>>,
    /// Cached fold of each portfolio's log. Derived state only; rebuilt by
    /// replay on a miss.
    ledgers: DashMap<String, LedgerState>,
}

impl TransactionService {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepositoryTrait>,
        repository: Arc<dyn TransactionRepositoryTrait>,
        market_data: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            portfolios,
            repository,
            market_data,
            locks: DashMap::new(),
            ledgers: DashMap::new(),
        }
    }

    fn mutation_lock(&self, portfolio_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(portfolio_id.to_string())
            .or_default()
            .clone()
    }

    fn current_state(&self, portfolio_id: &str) -> Result<LedgerState> {
        if let Some(cached) = self.ledgers.get(portfolio_id) {
            return Ok(cached.clone());
        }
        let transactions = self.repository.list_for_portfolio(portfolio_id)?;
        Ok(LedgerState::replay(&transactions))
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn execute_transaction(
        &self,
        portfolio_id: &str,
        request: TransactionRequest,
    ) -> Result<PortfolioSnapshot> {
        self.portfolios.get_by_id(portfolio_id)?;

        let lock = self.mutation_lock(portfolio_id);
        let _guard = lock.lock().await;

        let mut next = self.current_state(portfolio_id)?;

        let (kind, symbol, shares, amount) = match &request {
            TransactionRequest::StockBuy { symbol, shares } => {
                let price = self.market_data.get_latest_quote(symbol)?.close;
                let delta = next.apply_buy(symbol, *shares, price)?;
                (
                    TransactionKind::StockBuy,
                    Some(symbol.clone()),
                    Some(*shares),
                    delta,
                )
            }
            TransactionRequest::StockSell { symbol, shares } => {
                let price = self.market_data.get_latest_quote(symbol)?.close;
                let delta = next.apply_sell(symbol, *shares, price)?;
                (
                    TransactionKind::StockSell,
                    Some(symbol.clone()),
                    Some(*shares),
                    delta,
                )
            }
            TransactionRequest::CashDeposit { amount } => {
                let delta = next.apply_deposit(*amount)?;
                (TransactionKind::CashDeposit, None, None, delta)
            }
            TransactionRequest::CashWithdraw { amount } => {
                let delta = next.apply_withdraw(*amount)?;
                (TransactionKind::CashWithdraw, None, None, delta)
            }
        };

        let transaction = Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.to_string(),
            kind,
            symbol,
            shares,
            amount,
            cash_after: next.cash(),
            timestamp: Utc::now(),
        };
        debug!(
            "Committing {:?} on portfolio {}: cash {} -> {}",
            transaction.kind,
            portfolio_id,
            transaction.cash_after - transaction.amount,
            transaction.cash_after
        );

        self.repository.append(transaction)?;
        self.ledgers.insert(portfolio_id.to_string(), next.clone());

        Ok(next.snapshot(portfolio_id))
    }

    fn get_snapshot(&self, portfolio_id: &str) -> Result<PortfolioSnapshot> {
        self.portfolios.get_by_id(portfolio_id)?;
        Ok(self.current_state(portfolio_id)?.snapshot(portfolio_id))
    }

    fn get_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        self.portfolios.get_by_id(portfolio_id)?;
        self.repository.list_for_portfolio(portfolio_id)
    }
}
