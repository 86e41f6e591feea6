use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("No position held for {0}")]
    UnknownPosition(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
