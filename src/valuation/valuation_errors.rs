use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    /// A held symbol has no price history. Propagated rather than valued
    /// at zero so missing data is never silently hidden.
    #[error("No price available for held symbol {0}")]
    PriceUnavailable(String),
}
