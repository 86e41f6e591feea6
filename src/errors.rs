//! Root error types for the portfolio engine.
//!
//! Each domain module defines its own `thiserror` enum; this module
//! aggregates them into a single `Error` with a shared `Result` alias.

use thiserror::Error;

use crate::analytics::AnalyticsError;
use crate::market_data::MarketDataError;
use crate::portfolios::PortfolioError;
use crate::transactions::TransactionError;
use crate::valuation::ValuationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Portfolio error: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Valuation error: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
