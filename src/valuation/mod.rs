//! Valuation module - pure derivation of market values from a ledger
//! snapshot and the latest known prices.

mod valuation_errors;
mod valuation_model;
mod valuation_service;

#[cfg(test)]
mod valuation_service_tests;

pub use valuation_errors::ValuationError;
pub use valuation_model::{PortfolioValuation, PositionValuation};
pub use valuation_service::{value_snapshot, ValuationService, ValuationServiceTrait};
