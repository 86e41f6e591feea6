//! Transactions module - transaction records, the position ledger fold, and
//! the coordinator that applies operations to portfolios.

mod ledger;
mod transactions_errors;
mod transactions_model;
mod transactions_repository;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod ledger_tests;



pub use ledger::LedgerState;
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    PortfolioSnapshot, PositionView, Transaction, TransactionKind, TransactionRequest,
};
pub use transactions_repository::InMemoryTransactionRepository;
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
