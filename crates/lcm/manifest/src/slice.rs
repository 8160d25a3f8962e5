//! Network-slice custom-resource manifest
//!
//! The declarative spec region carries the per-instance parameters (id,
//! operational state, DNN) plus the testbed's fixed QoS and traffic
//! profile; the enforcement region is the shared retry policy block.

use serde::{Deserialize, Serialize};

use crate::enforcement::EnforcementPolicy;
use crate::ManifestResult;

/// Per-instance parameters of a slice manifest
///
/// Empty parameters are legal and render as empty-valued fields; the
/// permissive behavior of the raw renderer is kept here on purpose.
#[derive(Debug, Clone, Default)]
pub struct SliceManifestParams {
    pub id: String,
    pub operational_state: String,
    pub dnn: String,
}

impl SliceManifestParams {
    pub fn new(
        id: impl Into<String>,
        operational_state: impl Into<String>,
        dnn: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            operational_state: operational_state.into(),
            dnn: dnn.into(),
        }
    }

    /// Build the typed manifest document
    pub fn build(&self) -> SliceManifest {
        SliceManifest {
            api_version: "av.it.pt/v1".to_string(),
            kind: "ITAvNetSlice".to_string(),
            spec: SliceSpec {
                netslice: SliceSpecBlock {
                    id: self.id.clone(),
                    operational_state: self.operational_state.clone(),
                    dnn: self.dnn.clone(),
                    ..SliceSpecBlock::default()
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

/// Complete slice manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceManifest {
    pub api_version: String,
    pub kind: String,
    pub spec: SliceSpec,
}

/// Two-region spec: declarative slice block plus enforcement policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceSpec {
    #[serde(rename = "itav-netslice")]
    pub netslice: SliceSpecBlock,
    #[serde(rename = "itav-netslice-enforcement")]
    pub enforcement: EnforcementPolicy,
}

/// Declarative slice parameters consumed by the infrastructure controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceSpecBlock {
    pub id: String,
    pub administrative_state: String,
    pub operational_state: String,
    pub coverage_area: String,
    pub sst_snssai: Snssai,
    pub dnn: String,
    pub priority_label: u32,
    pub ue_mobility_level: String,
    pub reliability: f64,
    pub max_packet_size: MaxPacketSize,
    pub latency: Latency,
    pub delay_tolerance_support: String,
    pub deterministic_communication: DeterministicCommunication,
    pub dl_throughput_per_ue: Throughput,
    pub ul_throughput_per_ue: Throughput,
    pub dl_throughput_per_slice: Throughput,
    pub ul_throughput_per_slice: Throughput,
    pub term_density: u32,
    pub max_number_of_pdu_sessions: u32,
    pub max_number_of_ues: u32,
    pub n6_protection: String,
}

impl Default for SliceSpecBlock {
    fn default() -> Self {
        Self {
            id: String::new(),
            administrative_state: "UNLOCKED".to_string(),
            operational_state: String::new(),
            coverage_area: "IT".to_string(),
            sst_snssai: Snssai::default(),
            dnn: String::new(),
            priority_label: 100,
            ue_mobility_level: "stationary".to_string(),
            reliability: 99.999,
            max_packet_size: MaxPacketSize { maximum_size: 150 },
            latency: Latency { dl: 5, ul: 5 },
            delay_tolerance_support: "NOT_SUPPORTED".to_string(),
            deterministic_communication: DeterministicCommunication::default(),
            dl_throughput_per_ue: Throughput::per_ue(),
            ul_throughput_per_ue: Throughput::per_ue(),
            dl_throughput_per_slice: Throughput::per_slice(),
            ul_throughput_per_slice: Throughput::per_slice(),
            term_density: 10,
            max_number_of_pdu_sessions: 20,
            max_number_of_ues: 25,
            n6_protection: r#"[{"type":"PCC Rule","name":"rule_any"}]"#.to_string(),
        }
    }
}

/// Single network slice selection assistance information entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snssai {
    pub sst: u8,
    pub sd: String,
}

impl Default for Snssai {
    fn default() -> Self {
        Self {
            sst: 1,
            sd: "123456".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxPacketSize {
    pub maximum_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Latency {
    pub dl: u32,
    pub ul: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeterministicCommunication {
    pub dl: DeterministicDirection,
    pub ul: DeterministicDirection,
}

impl Default for DeterministicCommunication {
    fn default() -> Self {
        let direction = DeterministicDirection {
            availability: "SUPPORTED".to_string(),
            periodicity: 10,
        };
        Self {
            dl: direction.clone(),
            ul: direction,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeterministicDirection {
    pub availability: String,
    pub periodicity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Throughput {
    pub guaranteed_throughput: u32,
    pub maximum_throughput: u32,
}

impl Throughput {
    fn per_ue() -> Self {
        Self {
            guaranteed_throughput: 240,
            maximum_throughput: 600,
        }
    }

    fn per_slice() -> Self {
        Self {
            guaranteed_throughput: 5000,
            maximum_throughput: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_appear_verbatim() {
        let yaml = SliceManifestParams::new("S1", "ENABLED", "internet")
            .render_yaml()
            .unwrap();
        assert!(yaml.contains("id: S1"));
        assert!(yaml.contains("operationalState: ENABLED"));
        assert!(yaml.contains("dnn: internet"));
        assert!(yaml.contains("retryOnFail: true"));
        assert!(yaml.contains("maxRetries: 5"));
        assert!(yaml.contains("waitTimeBeforeRetrying: 10"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let params = SliceManifestParams::new("S1", "ENABLED", "internet");
        assert_eq!(
            params.render_yaml().unwrap(),
            params.render_yaml().unwrap()
        );
    }

    #[test]
    fn test_empty_parameters_render_blank_fields() {
        let yaml = SliceManifestParams::default().render_yaml().unwrap();
        assert!(yaml.contains("id: ''"));
        assert!(yaml.contains("operationalState: ''"));
    }

    #[test]
    fn test_two_regions_present() {
        let yaml = SliceManifestParams::new("S1", "ENABLED", "internet")
            .render_yaml()
            .unwrap();
        assert!(yaml.contains("itav-netslice:"));
        assert!(yaml.contains("itav-netslice-enforcement:"));
    }
}
