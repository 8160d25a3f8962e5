//! Characteristic keys of the wire contract
//!
//! These strings are shared with the orchestrator inventory and the
//! infrastructure controller; renaming one breaks deployed service
//! specifications.

/// Whether the testing phase has been requested (`"yes"` / `"not_yet"`)
pub const TESTS_REQUESTED: &str = "testsRequested";
/// Deployment descriptor reported by the NFV orchestrator, JSON text
pub const DEPLOYMENT_INFO: &str = "deployment_info";
/// Operational status reported by the deployment dependency
pub const OPERATIONAL_STATUS: &str = "OperationalStatus";
/// Operational state characteristic of slice and UE instances
pub const OPERATIONAL_STATE: &str = "Operational State";
/// Rollback requested flag on a dependent wrapper
pub const ROLLBACK_DEPLOYMENT: &str = "rollbackDeployment";
/// Rollback convergence flag on a dependent wrapper
pub const ROLLBACK_COMPLETED: &str = "rollbackDeployment:Completed";
/// Whether the underlying resource is still configured
pub const IS_CONFIGURED: &str = "isConfigured";
/// Audit copy of the last outbound payload
pub const REQUEST_PAYLOAD: &str = "request_payload";
/// Audit copy of the last outbound response, verbatim
pub const REQUEST_RESPONSE: &str = "request_response";
/// Identifier of the test specification to execute
pub const TEST_SPEC_REF: &str = "testSpecRef";
/// Identifier of the service-test instance on the orchestrator
pub const TEST_INSTANCE_REF: &str = "testInstanceRef";
/// Slice identity
pub const ID: &str = "Id";
/// UE subscription permanent identifier
pub const SUPI: &str = "Supi";
/// UE data network name
pub const DNN: &str = "DNN";
/// Slice subnet DNN reference
pub const SLICE_DNN_REF: &str = "Network Slice Subnet Ref (DNN)";
/// Rendered custom-resource manifest handed to the controller
pub const CR_SPEC: &str = "_CR_SPEC";

/// Mirrored observability projections on the bundle wrapper
pub const SLICE_NAME: &str = "slice:Name";
pub const SLICE_IS_CONFIGURED: &str = "slice:isConfigured";
pub const UE_SUPI: &str = "ue:Supi";
pub const UE_IS_CONFIGURED: &str = "ue:isConfigured";

/// Forced operational state written during a rollback
pub const DISABLED: &str = "DISABLED";
