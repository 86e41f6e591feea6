use async_trait::async_trait;
use dashmap::DashMap;

use super::portfolios_errors::PortfolioError;
use super::portfolios_model::Portfolio;
use super::portfolios_traits::PortfolioRepositoryTrait;
use crate::errors::Result;

/// In-memory portfolio directory keyed by portfolio id.
#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    portfolios: DashMap<String, Portfolio>,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for InMemoryPortfolioRepository {
    async fn insert(&self, portfolio: Portfolio) -> Result<Portfolio> {
        self.portfolios
            .insert(portfolio.id.clone(), portfolio.clone());
        Ok(portfolio)
    }

    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.portfolios
            .get(portfolio_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()).into())
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Portfolio>> {
        let mut owned: Vec<Portfolio> = self
            .portfolios
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }
}
