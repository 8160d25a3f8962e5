//! Supervision rule of the slice-and-UE bundle wrapper
//!
//! Runs at an externally determined cadence. Every invocation first mirrors
//! the dependents' identity and configuration flags onto the wrapper (an
//! observability projection, not a control decision), then evaluates the
//! rollback branches. Forcing disablement is checked strictly before
//! declaring completion, so the two never happen in the same poll.

use lcm_engine::{Rule, RuleContext, RuleResult};
use lcm_types::RoleName;

use crate::keys;
use crate::phase::BundlePhase;

/// Supervision reconciliation of a slice-and-UE bundle
pub struct BundleSupervision {
    slice_role: RoleName,
    ue_role: RoleName,
}

impl BundleSupervision {
    /// Create the rule with the catalog's default roles
    pub fn new() -> Self {
        Self {
            slice_role: RoleName::new("3GPPP Network Slice @ ITAv (CFS)"),
            ue_role: RoleName::new("3GPPP UE @ ITAv (CFS)"),
        }
    }

    pub fn with_roles(slice_role: impl Into<RoleName>, ue_role: impl Into<RoleName>) -> Self {
        Self {
            slice_role: slice_role.into(),
            ue_role: ue_role.into(),
        }
    }
}

impl Default for BundleSupervision {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BundleSupervision {
    fn name(&self) -> &str {
        "bundle-supervision"
    }

    fn evaluate(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()> {
        // Observability projection of the dependents onto the wrapper.
        let slice_name = ctx.remote(&self.slice_role, keys::ID)?;
        ctx.set_local(keys::SLICE_NAME, slice_name)?;
        let slice_configured = ctx.remote(&self.slice_role, keys::IS_CONFIGURED)?;
        ctx.set_local(keys::SLICE_IS_CONFIGURED, slice_configured.clone())?;
        let ue_supi = ctx.remote(&self.ue_role, keys::SUPI)?;
        ctx.set_local(keys::UE_SUPI, ue_supi)?;
        let ue_configured = ctx.remote(&self.ue_role, keys::IS_CONFIGURED)?;
        ctx.set_local(keys::UE_IS_CONFIGURED, ue_configured.clone())?;

        let rollback = ctx.local_or_empty(keys::ROLLBACK_DEPLOYMENT)?;
        let completed = ctx.local_or_empty(keys::ROLLBACK_COMPLETED)?;

        let phase = BundlePhase::derive(
            ctx.service_state(),
            &ctx.local_or_empty(keys::TESTS_REQUESTED)?,
            &rollback,
            &completed,
        );
        ctx.log(format!("SUPERVISION: bundle phase {phase}"));

        if rollback == "true" && completed == "false" {
            // Plain overwrite; re-issuing when already DISABLED is a no-op.
            ctx.set_remote_batch(&self.slice_role, &[(keys::OPERATIONAL_STATE, keys::DISABLED)])?;
            ctx.set_remote_batch(&self.ue_role, &[(keys::OPERATIONAL_STATE, keys::DISABLED)])?;
        } else if ue_configured == "false" && slice_configured == "false" && rollback == "true" {
            // Sole convergence predicate: both dependents have deconfigured.
            ctx.set_local(keys::ROLLBACK_COMPLETED, "true")?;
        }
        Ok(())
    }
}
