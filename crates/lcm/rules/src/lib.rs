//! Shipped reconciliation rules.
//!
//! These are the lifecycle rules of the network-application test bundle:
//! the after-activation rule of the deployment-bearing triplet (trigger the
//! testing phase, or cascade a rollback across the dependent wrappers), the
//! supervision rule of the slice-and-UE bundle (mirror dependent state,
//! force disablement, declare rollback convergence), and the pre-provision
//! rules that hand the slice and UE manifests to the infrastructure
//! controller.
//!
//! Reconciliation state is derived from characteristic values on every
//! invocation, never stored as a tag, so repeated polling is safe and
//! partially-applied writes are corrected by the next poll.

mod bundle;
pub mod keys;
mod payload;
mod phase;
mod provision;
mod triplet;

pub use bundle::BundleSupervision;
pub use payload::{Characteristic, CharacteristicValue, TestRequest, TestSpecificationRef};
pub use phase::BundlePhase;
pub use provision::{SlicePreProvision, UePreProvision};
pub use triplet::TripletAfterActivation;

use std::sync::Arc;

use lcm_engine::RuleRegistry;
use lcm_types::LifecycleEvent;

/// Canonical service kinds of the shipped bundle
pub mod kinds {
    pub const NETAPP_TRIPLET: &str = "netapp-triplet";
    pub const SLICE_UE_BUNDLE: &str = "network-slice-ue-bundle";
    pub const NETWORK_SLICE: &str = "network-slice";
    pub const UE: &str = "ue";
}

/// Register the shipped rules under their canonical kinds
///
/// `test_endpoint` is where the after-activation rule posts its test
/// request. Role names and identity fields keep their catalog defaults;
/// build the rules directly for anything non-standard.
pub fn install_defaults(registry: &mut RuleRegistry, test_endpoint: impl Into<String>) {
    registry.register(
        kinds::NETAPP_TRIPLET,
        LifecycleEvent::AfterActivation,
        Arc::new(TripletAfterActivation::new(test_endpoint)),
    );
    registry.register(
        kinds::SLICE_UE_BUNDLE,
        LifecycleEvent::Supervision,
        Arc::new(BundleSupervision::default()),
    );
    registry.register(
        kinds::NETWORK_SLICE,
        LifecycleEvent::PreProvision,
        Arc::new(SlicePreProvision::default()),
    );
    registry.register(
        kinds::UE,
        LifecycleEvent::PreProvision,
        Arc::new(UePreProvision::default()),
    );
}
