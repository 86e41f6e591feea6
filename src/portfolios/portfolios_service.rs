use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::portfolios_errors::PortfolioError;
use super::portfolios_model::Portfolio;
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::Result;

/// Service for managing the portfolio directory.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_portfolio(&self, owner_id: &str) -> Result<Portfolio> {
        if owner_id.trim().is_empty() {
            return Err(PortfolioError::InvalidData("owner id is empty".to_string()).into());
        }

        let portfolio = Portfolio {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            created_at: Utc::now(),
        };
        debug!(
            "Creating portfolio {} for owner {}",
            portfolio.id, portfolio.owner_id
        );
        self.repository.insert(portfolio).await
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository.get_by_id(portfolio_id)
    }

    fn list_portfolios(&self, owner_id: &str) -> Result<Vec<Portfolio>> {
        self.repository.list_by_owner(owner_id)
    }
}
