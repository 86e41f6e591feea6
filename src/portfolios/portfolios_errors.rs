use thiserror::Error;

/// Custom error type for portfolio directory operations
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
