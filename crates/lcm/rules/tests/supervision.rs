//! Supervision scenarios of the bundle rule: mirroring, forced disablement,
//! convergence, idempotence, and the permanent-stall edge case.

use std::sync::Arc;

use lcm_engine::RuleRegistry;
use lcm_inventory::{Inventory, ServiceInstance};
use lcm_invoker::RecordingInvoker;
use lcm_rules::{keys, kinds, BundleSupervision};
use lcm_types::{LifecycleEvent, ServiceId};

struct Fixture {
    inventory: Inventory,
    registry: RuleRegistry,
    bundle: ServiceId,
    slice: ServiceId,
    ue: ServiceId,
}

fn fixture(slice_configured: &str, ue_configured: &str) -> Fixture {
    let inventory = Inventory::new();

    let slice = inventory.insert(
        ServiceInstance::new(kinds::NETWORK_SLICE, "3GPPP Network Slice @ ITAv")
            .with_characteristic(keys::ID, "S1")
            .with_characteristic(keys::IS_CONFIGURED, slice_configured)
            .with_characteristic(keys::OPERATIONAL_STATE, "ENABLED"),
    );
    let ue = inventory.insert(
        ServiceInstance::new(kinds::UE, "3GPPP UE @ ITAv")
            .with_characteristic(keys::SUPI, "imsi-999700000000001")
            .with_characteristic(keys::IS_CONFIGURED, ue_configured)
            .with_characteristic(keys::OPERATIONAL_STATE, "ENABLED"),
    );
    let bundle = inventory.insert(
        ServiceInstance::new(kinds::SLICE_UE_BUNDLE, "Slice and UE Bundle @ ITAv")
            .with_reference("3GPPP Network Slice @ ITAv (CFS)", slice)
            .with_reference("3GPPP UE @ ITAv (CFS)", ue),
    );

    let mut registry = RuleRegistry::new();
    registry.register(
        kinds::SLICE_UE_BUNDLE,
        LifecycleEvent::Supervision,
        Arc::new(BundleSupervision::default()),
    );

    Fixture {
        inventory,
        registry,
        bundle,
        slice,
        ue,
    }
}

impl Fixture {
    fn poll(&self) {
        let invoker = RecordingInvoker::new();
        self.registry
            .dispatch(
                &self.inventory,
                &invoker,
                &self.bundle,
                LifecycleEvent::Supervision,
            )
            .unwrap();
    }

    fn characteristic(&self, id: &ServiceId, key: &str) -> Option<String> {
        self.inventory.characteristic(id, key).unwrap()
    }

    /// Full store snapshot of the bundle graph, for idempotence checks
    fn snapshot(&self) -> Vec<(ServiceId, Vec<(String, String)>)> {
        [self.bundle, self.slice, self.ue]
            .iter()
            .map(|id| {
                let mut chars: Vec<(String, String)> = self
                    .inventory
                    .get(id)
                    .unwrap()
                    .characteristics
                    .into_iter()
                    .collect();
                chars.sort();
                (*id, chars)
            })
            .collect()
    }
}

#[test]
fn test_mirrors_dependent_state_onto_wrapper() {
    let fx = fixture("true", "true");
    fx.poll();

    assert_eq!(
        fx.characteristic(&fx.bundle, keys::SLICE_NAME).as_deref(),
        Some("S1")
    );
    assert_eq!(
        fx.characteristic(&fx.bundle, keys::SLICE_IS_CONFIGURED)
            .as_deref(),
        Some("true")
    );
    assert_eq!(
        fx.characteristic(&fx.bundle, keys::UE_SUPI).as_deref(),
        Some("imsi-999700000000001")
    );
    assert_eq!(
        fx.characteristic(&fx.bundle, keys::UE_IS_CONFIGURED)
            .as_deref(),
        Some("true")
    );
}

#[test]
fn test_forced_disable_when_rollback_pending() {
    // Scenario: rollback requested and not yet completed.
    let fx = fixture("true", "true");
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_DEPLOYMENT, "true")
        .unwrap();
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED, "false")
        .unwrap();

    fx.poll();

    assert_eq!(
        fx.characteristic(&fx.slice, keys::OPERATIONAL_STATE)
            .as_deref(),
        Some("DISABLED")
    );
    assert_eq!(
        fx.characteristic(&fx.ue, keys::OPERATIONAL_STATE).as_deref(),
        Some("DISABLED")
    );
    // Disablement and completion never happen in the same poll.
    assert_eq!(
        fx.characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED)
            .as_deref(),
        Some("false")
    );
}

#[test]
fn test_convergence_declared_in_exactly_one_poll() {
    // Scenario: rollback requested, both dependents deconfigured.
    let fx = fixture("false", "false");
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_DEPLOYMENT, "true")
        .unwrap();

    fx.poll();

    assert_eq!(
        fx.characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED)
            .as_deref(),
        Some("true")
    );
}

#[test]
fn test_no_completion_without_rollback_request() {
    let fx = fixture("false", "false");
    fx.poll();

    assert_eq!(fx.characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED), None);
    assert_eq!(
        fx.characteristic(&fx.slice, keys::OPERATIONAL_STATE)
            .as_deref(),
        Some("ENABLED")
    );
}

#[test]
fn test_supervision_is_idempotent_across_states() {
    let seeds: [(&str, &str, Option<(&str, &str)>); 4] = [
        // steady state, no rollback
        ("true", "true", None),
        // rollback pending, dependents still configured
        ("true", "true", Some(("true", "false"))),
        // rollback requested, dependents deconfigured, completion pending
        ("false", "false", Some(("true", ""))),
        // rollback fully converged
        ("false", "false", Some(("true", "true"))),
    ];

    for (slice_configured, ue_configured, rollback) in seeds {
        let fx = fixture(slice_configured, ue_configured);
        if let Some((requested, completed)) = rollback {
            fx.inventory
                .set_characteristic(&fx.bundle, keys::ROLLBACK_DEPLOYMENT, requested)
                .unwrap();
            if !completed.is_empty() {
                fx.inventory
                    .set_characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED, completed)
                    .unwrap();
            }
        }

        fx.poll();
        let after_first = fx.snapshot();
        fx.poll();
        let after_second = fx.snapshot();
        assert_eq!(after_first, after_second);
    }
}

#[test]
fn test_stalled_rollback_never_completes_by_itself() {
    // Dependents never report isConfigured == "false": the bundle stays in
    // the rollback-requested state for as long as anyone polls it.
    let fx = fixture("true", "true");
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_DEPLOYMENT, "true")
        .unwrap();
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED, "false")
        .unwrap();

    for _ in 0..5 {
        fx.poll();
        assert_eq!(
            fx.characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED)
                .as_deref(),
            Some("false")
        );
        assert_eq!(
            fx.characteristic(&fx.slice, keys::OPERATIONAL_STATE)
                .as_deref(),
            Some("DISABLED")
        );
    }
}

#[test]
fn test_partial_cascade_is_corrected_by_repolling() {
    // A crash mid-cascade left the request flag set but the completion
    // flag unwritten; re-polling still drives the bundle to convergence.
    let fx = fixture("false", "false");
    fx.inventory
        .set_characteristic(&fx.bundle, keys::ROLLBACK_DEPLOYMENT, "true")
        .unwrap();
    // rollbackDeployment:Completed intentionally never written

    fx.poll();

    assert_eq!(
        fx.characteristic(&fx.bundle, keys::ROLLBACK_COMPLETED)
            .as_deref(),
        Some("true")
    );
}
