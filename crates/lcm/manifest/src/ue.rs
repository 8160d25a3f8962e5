//! User-equipment custom-resource manifest

use serde::{Deserialize, Serialize};

use crate::enforcement::EnforcementPolicy;
use crate::slice::Snssai;
use crate::ManifestResult;

/// Per-instance parameters of a UE manifest
#[derive(Debug, Clone, Default)]
pub struct UeManifestParams {
    pub operational_state: String,
    pub supi: String,
    pub dnn: String,
}

impl UeManifestParams {
    pub fn new(
        operational_state: impl Into<String>,
        supi: impl Into<String>,
        dnn: impl Into<String>,
    ) -> Self {
        Self {
            operational_state: operational_state.into(),
            supi: supi.into(),
            dnn: dnn.into(),
        }
    }

    /// Build the typed manifest document
    pub fn build(&self) -> UeManifest {
        UeManifest {
            api_version: "av.it.pt/v1".to_string(),
            kind: "ITAvUE".to_string(),
            spec: UeSpec {
                ue: UeSpecBlock {
                    operational_state: self.operational_state.clone(),
                    supi: self.supi.clone(),
                    dnn: self.dnn.clone(),
                    ..UeSpecBlock::default()
                },
                enforcement: EnforcementPolicy::default(),
            },
        }
    }

    /// Render the manifest document as YAML
    pub fn render_yaml(&self) -> ManifestResult<String> {
        Ok(serde_yaml::to_string(&self.build())?)
    }
}

/// Complete UE manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UeManifest {
    pub api_version: String,
    pub kind: String,
    pub spec: UeSpec,
}

/// Two-region spec: declarative UE block plus enforcement policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UeSpec {
    #[serde(rename = "itav-ue")]
    pub ue: UeSpecBlock,
    #[serde(rename = "itav-ue-enforcement")]
    pub enforcement: EnforcementPolicy,
}

/// Declarative UE parameters consumed by the infrastructure controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UeSpecBlock {
    pub operational_state: String,
    pub supi: String,
    #[serde(rename = "requestedNSSAI")]
    pub requested_nssai: Snssai,
    #[serde(rename = "defaultNSSAI")]
    pub default_nssai: Snssai,
    pub dnn: String,
    pub pdu_session: PduSession,
    pub session_ambr: SessionAmbr,
}

impl Default for UeSpecBlock {
    fn default() -> Self {
        Self {
            operational_state: String::new(),
            supi: String::new(),
            requested_nssai: Snssai::default(),
            default_nssai: Snssai::default(),
            dnn: String::new(),
            pdu_session: PduSession {
                r#type: "IPv4v6".to_string(),
            },
            session_ambr: SessionAmbr {
                uplink: 4_000_000,
                downlink: 4_000_000,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PduSession {
    pub r#type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAmbr {
    pub uplink: u64,
    pub downlink: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_appear_verbatim() {
        let yaml = UeManifestParams::new("ENABLED", "imsi-999700000000001", "internet")
            .render_yaml()
            .unwrap();
        assert!(yaml.contains("operationalState: ENABLED"));
        assert!(yaml.contains("supi: imsi-999700000000001"));
        assert!(yaml.contains("dnn: internet"));
        assert!(yaml.contains("itav-ue-enforcement:"));
    }

    #[test]
    fn test_empty_supi_renders_blank() {
        let yaml = UeManifestParams::new("ENABLED", "", "internet")
            .render_yaml()
            .unwrap();
        assert!(yaml.contains("supi: ''"));
    }
}
