//! Portfolios module - portfolio identity and directory.

mod portfolios_errors;
mod portfolios_model;
mod portfolios_repository;
mod portfolios_service;
mod portfolios_traits;


pub use portfolios_errors::PortfolioError;
pub use portfolios_model::Portfolio;
pub use portfolios_repository::InMemoryPortfolioRepository;
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
