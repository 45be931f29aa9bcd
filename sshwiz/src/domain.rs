use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One remembered selection value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub value: String,
    #[serde(with = "time::serde::rfc3339")]
    pub last_used: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl StoredEntry {
    pub fn new(value: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            value: value.into(),
            last_used: now,
            created_at: now,
        }
    }
}

/// Everything remembered across runs, one list per selection category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    #[serde(default)]
    pub keys: Vec<StoredEntry>,
    #[serde(default)]
    pub accounts: Vec<StoredEntry>,
    #[serde(default)]
    pub hosts: Vec<StoredEntry>,
    #[serde(default)]
    pub jumps: Vec<StoredEntry>,
}
