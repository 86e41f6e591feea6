//! Shared constants.

/// Number of decimal places kept on monetary values and risk statistics.
pub const DECIMAL_PRECISION: u32 = 8;

/// Default reference series used for beta calculations.
pub const DEFAULT_MARKET_SYMBOL: &str = "SPX";
