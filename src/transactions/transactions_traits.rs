use async_trait::async_trait;

use super::transactions_model::{PortfolioSnapshot, Transaction, TransactionRequest};
use crate::errors::Result;

/// Trait defining the contract for the append-only transaction log.
pub trait TransactionRepositoryTrait: Send + Sync {
    fn append(&self, transaction: Transaction) -> Result<Transaction>;
    /// Returns the portfolio's records in application order, oldest first.
    fn list_for_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for the transaction coordinator.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Applies one operation to a portfolio and returns the updated
    /// snapshot. Fully commits (ledger + record) or leaves state unchanged.
    async fn execute_transaction(
        &self,
        portfolio_id: &str,
        request: TransactionRequest,
    ) -> Result<PortfolioSnapshot>;
    fn get_snapshot(&self, portfolio_id: &str) -> Result<PortfolioSnapshot>;
    fn get_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}
