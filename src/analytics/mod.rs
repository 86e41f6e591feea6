//! Analytics module - return series and statistical risk measures
//! (variance, beta, covariance and correlation matrices).

mod analytics_errors;
mod analytics_model;
mod analytics_service;
mod returns;



pub use analytics_errors::AnalyticsError;
pub use analytics_model::{Matrix, RiskMatrices};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
pub use returns::{align, mean, return_series, sample_covariance, sample_variance, ReturnPoint};
