//! Portfolio domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio owned by a single user. Cash and positions are not stored
/// here; they are the fold of the portfolio's transaction log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}
