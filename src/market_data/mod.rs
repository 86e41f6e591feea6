//! Market data module - append-only price series store and external feed seam.

mod market_data_constants;
mod market_data_errors;
mod market_data_model;
mod market_data_provider;
mod market_data_repository;
mod market_data_service;
mod market_data_traits;


pub use market_data_constants::*;
pub use market_data_errors::MarketDataError;
pub use market_data_model::{DataSource, NewQuote, Quote};
pub use market_data_provider::MarketDataProviderTrait;
pub use market_data_repository::InMemoryQuoteRepository;
pub use market_data_service::MarketDataService;
pub use market_data_traits::{MarketDataRepositoryTrait, MarketDataServiceTrait};
