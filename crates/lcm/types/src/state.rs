//! Orchestrator-owned service lifecycle state
//!
//! The rule layer never drives this state machine; it only marks an
//! instance `Failed` when a rule invocation errors, so the orchestrator can
//! surface it. Reconciliation phases (rollback requested/completed, tests
//! requested) are deliberately NOT here: those are derived from
//! characteristic values, never stored as a tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle state of a service instance, owned by the orchestrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    /// Being provisioned; not yet serving
    #[default]
    Provisioning,
    /// Activated and serving
    Active,
    /// A rule invocation failed; surfaced to the orchestrator
    Failed,
    /// Deactivated by the orchestrator
    Terminated,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceState::Provisioning => "provisioning",
            ServiceState::Active => "active",
            ServiceState::Failed => "failed",
            ServiceState::Terminated => "terminated",
        };
        f.write_str(s)
    }
}
