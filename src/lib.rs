pub mod analytics;
pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolios;
pub mod transactions;
pub mod valuation;

pub use errors::{Error, Result};
pub use transactions::*;
pub use valuation::*;
