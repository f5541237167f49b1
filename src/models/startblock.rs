//! Startblock model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Startblock database model
///
/// Blocks are handed around as ordered slices; the position in the slice is
/// the release order, slowest block first.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct StartBlock {
    pub id: i64,
    pub name: String,
    /// Start time as stored, e.g. seconds after the race start
    pub start_time: String,
}

impl StartBlock {
    pub fn new(id: i64, name: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            start_time: start_time.into(),
        }
    }
}
