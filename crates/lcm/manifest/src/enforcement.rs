//! Enforcement policy block shared by every generated manifest
//!
//! Retry/backoff intent is declared here and enforced by the external
//! infrastructure controller; the rule layer itself never loops on a
//! failed call.

use serde::{Deserialize, Serialize};

/// Fixed enforcement policy region of a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnforcementPolicy {
    pub retry_on_fail: bool,
    pub max_retries: u32,
    /// Seconds to wait between controller-side retries
    pub wait_time_before_retrying: u64,
}

impl Default for EnforcementPolicy {
    fn default() -> Self {
        Self {
            retry_on_fail: true,
            max_retries: 5,
            wait_time_before_retrying: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_constants() {
        let policy = EnforcementPolicy::default();
        assert!(policy.retry_on_fail);
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.wait_time_before_retrying, 10);
    }

    #[test]
    fn test_serializes_camel_case() {
        let yaml = serde_yaml::to_string(&EnforcementPolicy::default()).unwrap();
        assert!(yaml.contains("retryOnFail: true"));
        assert!(yaml.contains("maxRetries: 5"));
        assert!(yaml.contains("waitTimeBeforeRetrying: 10"));
    }
}
