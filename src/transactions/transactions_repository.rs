use dashmap::DashMap;

use super::transactions_model::Transaction;
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::Result;

/// In-memory append-only transaction log, one ordered vector per portfolio.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    log: DashMap<String, Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn append(&self, transaction: Transaction) -> Result<Transaction> {
        self.log
            .entry(transaction.portfolio_id.clone())
            .or_default()
            .push(transaction.clone());
        Ok(transaction)
    }

    fn list_for_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .log
            .get(portfolio_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
