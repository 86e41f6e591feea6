use log::{debug, warn};
use rayon::prelude::*;
use rust_decimal::{Decimal, MathematicalOps};
use std::collections::HashMap;
use std::sync::Arc;

use super::analytics_errors::AnalyticsError;
use super::analytics_model::{Matrix, RiskMatrices};
use super::returns::{align, return_series, sample_covariance, sample_variance, ReturnPoint};
use crate::constants::{DECIMAL_PRECISION, DEFAULT_MARKET_SYMBOL};
use crate::errors::Result;
use crate::market_data::MarketDataServiceTrait;
use crate::transactions::TransactionServiceTrait;

/// Trait defining the contract for risk analytics over a portfolio.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Sample variance of each held symbol's return series. Symbols whose
    /// variance cannot be computed are omitted from the map.
    fn get_variance(&self, portfolio_id: &str) -> Result<HashMap<String, Decimal>>;
    /// Beta of each held symbol against the reference market series,
    /// aligned on timestamp. Symbols without enough aligned history are
    /// omitted.
    fn get_beta(&self, portfolio_id: &str) -> Result<HashMap<String, Decimal>>;
    /// Pairwise covariance and correlation matrices over the held symbols.
    fn get_covariance_correlation(&self, portfolio_id: &str) -> Result<RiskMatrices>;
}

/// Computes risk measures on demand from current price history and current
/// holdings. Nothing is persisted or cached across requests.
pub struct AnalyticsService {
    transactions: Arc<dyn TransactionServiceTrait>,
    market_data: Arc<dyn MarketDataServiceTrait>,
    market_symbol: String,
}

impl AnalyticsService {
    pub fn new(
        transactions: Arc<dyn TransactionServiceTrait>,
        market_data: Arc<dyn MarketDataServiceTrait>,
    ) -> Self {
        Self {
            transactions,
            market_data,
            market_symbol: DEFAULT_MARKET_SYMBOL.to_string(),
        }
    }

    /// Overrides the reference series used for beta.
    pub fn with_market_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.market_symbol = symbol.into();
        self
    }

    fn held_symbols(&self, portfolio_id: &str) -> Result<Vec<String>> {
        let snapshot = self.transactions.get_snapshot(portfolio_id)?;
        Ok(snapshot
            .positions
            .iter()
            .map(|p| p.symbol.clone())
            .collect())
    }

    fn symbol_returns(&self, symbol: &str) -> Result<Vec<ReturnPoint>> {
        let history = self.market_data.get_history(symbol)?;
        let returns = return_series(&history);
        if returns.is_empty() {
            return Err(AnalyticsError::InsufficientHistory {
                symbol: symbol.to_string(),
                points: history.len(),
            }
            .into());
        }
        Ok(returns)
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_variance(&self, portfolio_id: &str) -> Result<HashMap<String, Decimal>> {
        let mut variances = HashMap::new();
        for symbol in self.held_symbols(portfolio_id)? {
            let returns = match self.symbol_returns(&symbol) {
                Ok(returns) => returns,
                Err(e) => {
                    warn!("Skipping variance for {}: {}", symbol, e);
                    continue;
                }
            };
            let values: Vec<Decimal> = returns.iter().map(|r| r.value).collect();
            match sample_variance(&values) {
                Some(variance) => {
                    variances.insert(symbol, variance.round_dp(DECIMAL_PRECISION));
                }
                None => warn!(
                    "Skipping variance for {}: {} return point(s)",
                    symbol,
                    values.len()
                ),
            }
        }
        Ok(variances)
    }

    fn get_beta(&self, portfolio_id: &str) -> Result<HashMap<String, Decimal>> {
        let market_history = self.market_data.get_history(&self.market_symbol)?;
        let market_returns = return_series(&market_history);
        if market_returns.len() < 2 {
            return Err(AnalyticsError::InsufficientHistory {
                symbol: self.market_symbol.clone(),
                points: market_history.len(),
            }
            .into());
        }
        let market_values: Vec<Decimal> = market_returns.iter().map(|r| r.value).collect();
        match sample_variance(&market_values) {
            Some(variance) if variance.is_zero() => {
                return Err(AnalyticsError::DegenerateMarket(self.market_symbol.clone()).into())
            }
            _ => {}
        }

        let mut betas = HashMap::new();
        for symbol in self.held_symbols(portfolio_id)? {
            let returns = match self.symbol_returns(&symbol) {
                Ok(returns) => returns,
                Err(e) => {
                    warn!("Skipping beta for {}: {}", symbol, e);
                    continue;
                }
            };

            let (symbol_aligned, market_aligned) = align(&returns, &market_returns);
            let covariance = match sample_covariance(&symbol_aligned, &market_aligned) {
                Some(covariance) => covariance,
                None => {
                    warn!(
                        "Skipping beta for {}: {} aligned point(s) with {}",
                        symbol,
                        symbol_aligned.len(),
                        self.market_symbol
                    );
                    continue;
                }
            };
            // Var(m) over the aligned window, matching the covariance.
            let market_variance = match sample_variance(&market_aligned) {
                Some(variance) if !variance.is_zero() => variance,
                _ => {
                    warn!(
                        "Skipping beta for {}: market variance is degenerate on the aligned window",
                        symbol
                    );
                    continue;
                }
            };
            betas.insert(
                symbol,
                (covariance / market_variance).round_dp(DECIMAL_PRECISION),
            );
        }
        Ok(betas)
    }

    fn get_covariance_correlation(&self, portfolio_id: &str) -> Result<RiskMatrices> {
        let symbols = self.held_symbols(portfolio_id)?;

        let series: HashMap<String, Vec<ReturnPoint>> = symbols
            .iter()
            .map(|symbol| {
                let returns = self
                    .market_data
                    .get_history(symbol)
                    .map(|history| return_series(&history))
                    .unwrap_or_default();
                (symbol.clone(), returns)
            })
            .collect();

        // Upper-triangle pairs are independent given the series; compute
        // them in parallel and mirror below.
        let pairs: Vec<(usize, usize)> = (0..symbols.len())
            .flat_map(|i| (i..symbols.len()).map(move |j| (i, j)))
            .collect();
        let cells: Vec<((usize, usize), Decimal)> = pairs
            .par_iter()
            .filter_map(|&(i, j)| {
                let (a, b) = align(&series[&symbols[i]], &series[&symbols[j]]);
                sample_covariance(&a, &b).map(|covariance| ((i, j), covariance))
            })
            .collect();

        // Every held symbol appears as a row even when none of its cells
        // could be computed.
        let mut covariance: Matrix = symbols
            .iter()
            .map(|s| (s.clone(), HashMap::new()))
            .collect();
        let mut correlation: Matrix = covariance.clone();

        let mut raw: HashMap<(usize, usize), Decimal> = HashMap::new();
        for ((i, j), value) in cells {
            raw.insert((i, j), value);
            insert_symmetric(
                &mut covariance,
                &symbols[i],
                &symbols[j],
                value.round_dp(DECIMAL_PRECISION),
            );
        }

        let deviations: HashMap<usize, Decimal> = (0..symbols.len())
            .filter_map(|i| {
                raw.get(&(i, i))
                    .and_then(|variance| variance.sqrt())
                    .map(|std| (i, std))
            })
            .collect();

        for (&(i, j), value) in &raw {
            let (std_i, std_j) = match (deviations.get(&i), deviations.get(&j)) {
                (Some(a), Some(b)) if !a.is_zero() && !b.is_zero() => (*a, *b),
                _ => {
                    debug!(
                        "Correlation cell ({}, {}) omitted: degenerate series",
                        symbols[i], symbols[j]
                    );
                    continue;
                }
            };
            let cell = if i == j {
                Decimal::ONE
            } else {
                (*value / (std_i * std_j)).round_dp(DECIMAL_PRECISION)
            };
            insert_symmetric(&mut correlation, &symbols[i], &symbols[j], cell);
        }

        Ok(RiskMatrices {
            covariance,
            correlation,
        })
    }
}

fn insert_symmetric(matrix: &mut Matrix, a: &str, b: &str, value: Decimal) {
    if let Some(row) = matrix.get_mut(a) {
        row.insert(b.to_string(), value);
    }
    if a != b {
        if let Some(row) = matrix.get_mut(b) {
            row.insert(a.to_string(), value);
        }
    }
}
