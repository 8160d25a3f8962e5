//! Per-dispatch audit journal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped audit message appended by a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the entry was appended
    pub at: DateTime<Utc>,
    /// The message as the rule wrote it
    pub message: String,
}

impl JournalEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            message: message.into(),
        }
    }
}
