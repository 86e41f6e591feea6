//! Analytics response models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Square symmetric symbol-by-symbol mapping. A missing cell means the
/// value could not be computed for that pair; it is never reported as
/// zero, since zero would falsely imply no relationship.
pub type Matrix = HashMap<String, HashMap<String, Decimal>>;

/// Covariance and correlation matrices over a portfolio's held symbols.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskMatrices {
    pub covariance: Matrix,
    pub correlation: Matrix,
}
