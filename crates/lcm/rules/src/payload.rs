//! Test-request payload sent to the test orchestrator
//!
//! TMF-style service-order shape: a name, a flat characteristic list and a
//! test-specification reference.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound test request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRequest {
    pub name: String,
    pub characteristic: Vec<Characteristic>,
    #[serde(rename = "testSpecification")]
    pub test_specification: TestSpecificationRef,
}

/// One named characteristic of the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Characteristic {
    pub name: String,
    pub value: CharacteristicValue,
}

/// TMF value wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicValue {
    pub value: Value,
}

/// Reference to the test specification to execute
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestSpecificationRef {
    pub uuid: String,
    pub id: String,
}

impl TestRequest {
    /// Start a request for the named service
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characteristic: Vec::new(),
            test_specification: TestSpecificationRef::default(),
        }
    }

    /// Append a plain-text characteristic
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.characteristic.push(Characteristic {
            name: name.into(),
            value: CharacteristicValue {
                value: Value::String(value.into()),
            },
        });
        self
    }

    /// Append a characteristic whose value is spliced as raw JSON when it
    /// parses as JSON, and as a JSON string otherwise
    pub fn with_raw(mut self, name: impl Into<String>, raw: &str) -> Self {
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        self.characteristic.push(Characteristic {
            name: name.into(),
            value: CharacteristicValue { value },
        });
        self
    }

    /// Set the test specification reference (uuid and id share one value)
    pub fn with_specification(mut self, spec_ref: impl Into<String>) -> Self {
        let spec_ref = spec_ref.into();
        self.test_specification = TestSpecificationRef {
            uuid: spec_ref.clone(),
            id: spec_ref,
        };
        self
    }

    /// Serialize the request body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_value_is_quoted() {
        let json = TestRequest::new("svc")
            .with_text("testbed_id", "testbed_itav")
            .to_json()
            .unwrap();
        assert!(json.contains(r#""name":"testbed_id""#));
        assert!(json.contains(r#""value":"testbed_itav""#));
    }

    #[test]
    fn test_json_deployment_info_splices_raw() {
        let json = TestRequest::new("svc")
            .with_raw("deployment_info", r#"{"ns_id":"abc"}"#)
            .to_json()
            .unwrap();
        // spliced as an object, not as an escaped string
        assert!(json.contains(r#""value":{"ns_id":"abc"}"#));
    }

    #[test]
    fn test_non_json_deployment_info_becomes_string() {
        let json = TestRequest::new("svc")
            .with_raw("deployment_info", "abc")
            .to_json()
            .unwrap();
        assert!(json.contains(r#""value":"abc""#));
    }

    #[test]
    fn test_specification_carries_ref_twice() {
        let json = TestRequest::new("svc")
            .with_specification("spec-77")
            .to_json()
            .unwrap();
        assert!(json.contains(r#""uuid":"spec-77""#));
        assert!(json.contains(r#""id":"spec-77""#));
    }
}
