//! Logical reconciliation phase of a bundle
//!
//! The phase is derived from current characteristic values every time it is
//! needed and is never written back: supervision decisions read the raw
//! flags, and this projection exists for logs and operators only.

use lcm_types::ServiceState;
use std::fmt;

/// Derived reconciliation phase of a bundle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlePhase {
    Provisioning,
    Activated,
    TestRequested,
    RollbackRequested,
    RollbackCompleted,
    Failed,
}

impl BundlePhase {
    /// Derive the phase from the lifecycle state and the reconciliation
    /// flags, most-converged first
    pub fn derive(
        state: ServiceState,
        tests_requested: &str,
        rollback: &str,
        completed: &str,
    ) -> Self {
        if state == ServiceState::Failed {
            return BundlePhase::Failed;
        }
        if completed == "true" {
            return BundlePhase::RollbackCompleted;
        }
        if rollback == "true" {
            return BundlePhase::RollbackRequested;
        }
        match tests_requested {
            "yes" => BundlePhase::TestRequested,
            "not_yet" => BundlePhase::Activated,
            _ => BundlePhase::Provisioning,
        }
    }
}

impl fmt::Display for BundlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BundlePhase::Provisioning => "PROVISIONING",
            BundlePhase::Activated => "ACTIVATED",
            BundlePhase::TestRequested => "TEST_REQUESTED",
            BundlePhase::RollbackRequested => "ROLLBACK_REQUESTED",
            BundlePhase::RollbackCompleted => "ROLLBACK_COMPLETED",
            BundlePhase::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_state_wins() {
        let phase = BundlePhase::derive(ServiceState::Failed, "yes", "true", "true");
        assert_eq!(phase, BundlePhase::Failed);
    }

    #[test]
    fn test_completion_outranks_request() {
        let phase = BundlePhase::derive(ServiceState::Active, "", "true", "true");
        assert_eq!(phase, BundlePhase::RollbackCompleted);
        let phase = BundlePhase::derive(ServiceState::Active, "", "true", "false");
        assert_eq!(phase, BundlePhase::RollbackRequested);
    }

    #[test]
    fn test_test_flags_map_to_phases() {
        assert_eq!(
            BundlePhase::derive(ServiceState::Active, "yes", "", ""),
            BundlePhase::TestRequested
        );
        assert_eq!(
            BundlePhase::derive(ServiceState::Active, "not_yet", "", ""),
            BundlePhase::Activated
        );
        assert_eq!(
            BundlePhase::derive(ServiceState::Provisioning, "", "", ""),
            BundlePhase::Provisioning
        );
    }
}
