//! Timestamped row submitted to the remote table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Fixed-width microsecond timestamp, e.g. `20240101000000123456`.
const ID_FORMAT: &str = "%Y%m%d%H%M%S%6f";
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row to persist: a unique id plus a human-readable creation time,
/// both derived from the same captured instant.
///
/// The id is a 20-character zero-padded timestamp, so ids minted by one
/// process sort lexicographically in creation order. Two submissions inside
/// the same microsecond would collide; the store's own uniqueness constraint
/// is the only net under that gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub created_at: String,
}

impl Record {
    /// Build a record from the current wall clock (one clock read)
    pub fn now() -> Self {
        Self::from_instant(chrono::Local::now().naive_local())
    }

    /// Derive both fields from one captured instant
    pub fn from_instant(instant: NaiveDateTime) -> Self {
        Self {
            id: instant.format(ID_FORMAT).to_string(),
            created_at: instant.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}
