use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Fewer than two usable observations for a return series.
    #[error("Insufficient history for {symbol}: {points} observation(s)")]
    InsufficientHistory { symbol: String, points: usize },

    /// The reference market series has zero variance.
    #[error("Degenerate market series {0}: zero variance")]
    DegenerateMarket(String),

    /// A flat series with zero standard deviation cannot be correlated.
    #[error("Degenerate series {0}: zero standard deviation")]
    DegenerateSeries(String),
}
