//! Pre-provision rules: hand the rendered manifest to the controller
//!
//! Each rule reads the instance's own parameters, renders the typed
//! custom-resource document and writes it to the referenced RFS instance's
//! `_CR_SPEC` characteristic, where the infrastructure controller picks it
//! up. Empty parameters render as empty-valued fields; a partial render is
//! not an error.

use lcm_engine::{Rule, RuleContext, RuleError, RuleResult};
use lcm_manifest::{SliceManifestParams, UeManifestParams};
use lcm_types::RoleName;

use crate::keys;

/// Pre-provision rule of a network slice
pub struct SlicePreProvision {
    rfs_role: RoleName,
}

impl SlicePreProvision {
    pub fn new() -> Self {
        Self {
            rfs_role: RoleName::new("3GPPP Network Slice @ ITAv (RFS)"),
        }
    }

    pub fn with_rfs_role(mut self, role: impl Into<RoleName>) -> Self {
        self.rfs_role = role.into();
        self
    }
}

impl Default for SlicePreProvision {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SlicePreProvision {
    fn name(&self) -> &str {
        "slice-pre-provision"
    }

    fn evaluate(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()> {
        let params = SliceManifestParams::new(
            ctx.local_or_empty(keys::ID)?,
            ctx.local_or_empty(keys::OPERATIONAL_STATE)?,
            ctx.local_or_empty(keys::SLICE_DNN_REF)?,
        );
        let manifest = params
            .render_yaml()
            .map_err(|err| RuleError::Internal(err.to_string()))?;
        ctx.set_remote_batch(&self.rfs_role, &[(keys::CR_SPEC, manifest.as_str())])
    }
}

/// Pre-provision rule of a user equipment
pub struct UePreProvision {
    rfs_role: RoleName,
}

impl UePreProvision {
    pub fn new() -> Self {
        Self {
            rfs_role: RoleName::new("3GPPP UE @ ITAv (RFS)"),
        }
    }

    pub fn with_rfs_role(mut self, role: impl Into<RoleName>) -> Self {
        self.rfs_role = role.into();
        self
    }
}

impl Default for UePreProvision {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UePreProvision {
    fn name(&self) -> &str {
        "ue-pre-provision"
    }

    fn evaluate(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()> {
        let params = UeManifestParams::new(
            ctx.local_or_empty(keys::OPERATIONAL_STATE)?,
            ctx.local_or_empty(keys::SUPI)?,
            ctx.local_or_empty(keys::DNN)?,
        );
        let manifest = params
            .render_yaml()
            .map_err(|err| RuleError::Internal(err.to_string()))?;
        ctx.set_remote_batch(&self.rfs_role, &[(keys::CR_SPEC, manifest.as_str())])
    }
}
