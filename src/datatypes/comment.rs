use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visitor-submitted entry on a city page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub nick: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Ids count up per city, derived from the last stored entry. A city
    /// without comments starts at 1. Comments are never deleted, so the last
    /// entry always carries the highest id. Saturates instead of wrapping if
    /// a hand-edited store holds `u64::MAX`.
    pub fn next_id(existing: &[Comment]) -> u64 {
        existing.last().map_or(1, |last| last.id.saturating_add(1))
    }
}
