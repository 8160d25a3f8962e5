//! After-activation rule of the deployment-bearing triplet
//!
//! Exactly one branch fires per invocation, in priority order: trigger the
//! testing phase, cascade a rollback across the dependent wrappers, or
//! settle into the steady state.

use lcm_engine::{Rule, RuleContext, RuleError, RuleResult};
use lcm_invoker::OutboundRequest;
use lcm_types::RoleName;

use crate::keys;
use crate::payload::TestRequest;

/// After-activation reconciliation of a network-application triplet
pub struct TripletAfterActivation {
    /// Role of the deployment dependency reporting `deployment_info`
    dependency_role: RoleName,
    /// Roles of the dependent wrappers flagged during a rollback, in order
    rollback_roles: Vec<RoleName>,
    /// Where the test request is posted
    test_endpoint: String,
    testbed_id: String,
    network_service_id: String,
    netapp_id: String,
}

impl TripletAfterActivation {
    /// Create the rule with the catalog's default roles and identity fields
    pub fn new(test_endpoint: impl Into<String>) -> Self {
        Self {
            dependency_role: RoleName::new("migrate_nsd@OSMv15-ITAv"),
            rollback_roles: vec![
                RoleName::new("3GPPP Network Slice and UE Bundle @ ITAv (CFS)"),
                RoleName::new("CI/CD Agent (Jenkins) - CFS"),
            ],
            test_endpoint: test_endpoint.into(),
            testbed_id: "testbed_itav".to_string(),
            network_service_id: "vOBU_migration".to_string(),
            netapp_id: "OdinS-NetworkApplication".to_string(),
        }
    }

    pub fn with_dependency_role(mut self, role: impl Into<RoleName>) -> Self {
        self.dependency_role = role.into();
        self
    }

    pub fn with_rollback_roles(mut self, roles: Vec<RoleName>) -> Self {
        self.rollback_roles = roles;
        self
    }

    pub fn with_identity(
        mut self,
        testbed_id: impl Into<String>,
        network_service_id: impl Into<String>,
        netapp_id: impl Into<String>,
    ) -> Self {
        self.testbed_id = testbed_id.into();
        self.network_service_id = network_service_id.into();
        self.netapp_id = netapp_id.into();
        self
    }

    fn request_tests(&self, ctx: &mut RuleContext<'_>, deployment_info: &str) -> RuleResult<()> {
        ctx.log("AFTER_ACTIVATION: deployment info present, triggering the testing phase");
        ctx.set_local(keys::TESTS_REQUESTED, "yes")?;

        let service_test_id = ctx.local_or_empty(keys::TEST_INSTANCE_REF)?;
        let spec_ref = ctx.local_or_empty(keys::TEST_SPEC_REF)?;
        let payload = TestRequest::new(ctx.service_name())
            .with_text("testbed_id", &self.testbed_id)
            .with_raw(keys::DEPLOYMENT_INFO, deployment_info)
            .with_text("NODS_ServiceTest_ID", service_test_id)
            .with_text("network_service_id", &self.network_service_id)
            .with_text("netapp_id", &self.netapp_id)
            .with_specification(spec_ref)
            .to_json()
            .map_err(|err| RuleError::Internal(err.to_string()))?;

        // Second write of the same value; harmless, kept from the shipped
        // service specification.
        ctx.set_local(keys::TESTS_REQUESTED, "yes")?;

        ctx.log(payload.clone());
        ctx.set_local(keys::REQUEST_PAYLOAD, payload.clone())?;
        let response =
            ctx.invoke(&OutboundRequest::post(&self.test_endpoint).with_json_body(payload));
        ctx.log(response.clone());
        ctx.set_local(keys::REQUEST_RESPONSE, response)?;
        Ok(())
    }

    fn cascade_rollback(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()> {
        ctx.log("AFTER_ACTIVATION: the deployment failed, terminating its dependencies");
        for role in &self.rollback_roles {
            ctx.set_remote_batch(
                role,
                &[
                    (keys::ROLLBACK_DEPLOYMENT, "true"),
                    (keys::ROLLBACK_COMPLETED, "false"),
                ],
            )?;
        }
        // Read-after-write audit of the rollback flags on every wrapper.
        for role in &self.rollback_roles {
            for key in [keys::ROLLBACK_DEPLOYMENT, keys::ROLLBACK_COMPLETED] {
                let value = ctx.remote(role, key)?;
                ctx.log(format!("{role}: {key}={value}"));
            }
        }
        Ok(())
    }
}

impl Rule for TripletAfterActivation {
    fn name(&self) -> &str {
        "triplet-after-activation"
    }

    fn evaluate(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()> {
        let tests_requested = ctx.local_or_empty(keys::TESTS_REQUESTED)?;
        let deployment_info = ctx.remote(&self.dependency_role, keys::DEPLOYMENT_INFO)?;

        if tests_requested != "yes" && !deployment_info.is_empty() {
            self.request_tests(ctx, &deployment_info)
        } else if ctx.remote(&self.dependency_role, keys::OPERATIONAL_STATUS)? == "failed" {
            self.cascade_rollback(ctx)
        } else {
            ctx.set_local(keys::TESTS_REQUESTED, "not_yet")
        }
    }
}
