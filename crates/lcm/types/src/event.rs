//! Lifecycle event hooks at which rules run
//!
//! The hook set is fixed by the orchestrator contract. The engine treats an
//! event as an opaque tag: it selects a rule by (kind, event) and nothing
//! else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named point in a service instance's life at which rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleEvent {
    /// Before the orchestrator provisions the instance
    PreProvision,
    /// When the inventory record is created
    Creation,
    /// After the instance has been activated
    AfterActivation,
    /// Recurring poll at an externally determined cadence
    Supervision,
}

impl LifecycleEvent {
    /// All hooks, in lifecycle order
    pub const ALL: [LifecycleEvent; 4] = [
        LifecycleEvent::PreProvision,
        LifecycleEvent::Creation,
        LifecycleEvent::AfterActivation,
        LifecycleEvent::Supervision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::PreProvision => "PRE_PROVISION",
            LifecycleEvent::Creation => "CREATION",
            LifecycleEvent::AfterActivation => "AFTER_ACTIVATION",
            LifecycleEvent::Supervision => "SUPERVISION",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tags_match_display() {
        for event in LifecycleEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event));
        }
    }
}
