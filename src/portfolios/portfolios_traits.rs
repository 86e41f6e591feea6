use async_trait::async_trait;

use super::portfolios_model::Portfolio;
use crate::errors::Result;

/// Trait defining the contract for portfolio directory storage.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio>;
    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Portfolio>>;
}

/// Trait defining the contract for portfolio directory operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn create_portfolio(&self, owner_id: &str) -> Result<Portfolio>;
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn list_portfolios(&self, owner_id: &str) -> Result<Vec<Portfolio>>;
}
