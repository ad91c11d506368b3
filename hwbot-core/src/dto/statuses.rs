//! Review API DTOs

use serde::{Deserialize, Serialize};

/// Query string for the homework statuses endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusesQuery {
    /// Unix timestamp; only submissions changed since then are listed
    pub from_date: i64,
}
