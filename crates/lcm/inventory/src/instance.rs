//! Service instances: one managed object of the orchestrator inventory
//!
//! An instance carries its identity, its catalog kind, a flat
//! characteristic map (string key → string value) and the role-named
//! references that make up the service graph.

use lcm_types::{RoleName, ServiceId, ServiceKind, ServiceState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One managed service instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// Unique instance identifier
    pub id: ServiceId,
    /// Catalog kind, the tag rules are registered against
    pub kind: ServiceKind,
    /// Human-readable service name
    pub name: String,
    /// Orchestrator-owned lifecycle state
    pub state: ServiceState,
    /// Characteristic map; created on first write, last write wins
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub characteristics: HashMap<String, String>,
    /// Role-named references to other instances
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub references: HashMap<RoleName, ServiceId>,
}

impl ServiceInstance {
    /// Create a new instance of the given kind
    pub fn new(kind: impl Into<ServiceKind>, name: impl Into<String>) -> Self {
        Self {
            id: ServiceId::generate(),
            kind: kind.into(),
            name: name.into(),
            state: ServiceState::default(),
            characteristics: HashMap::new(),
            references: HashMap::new(),
        }
    }

    pub fn with_characteristic(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.characteristics.insert(key.into(), value.into());
        self
    }

    pub fn with_reference(mut self, role: impl Into<RoleName>, target: ServiceId) -> Self {
        self.references.insert(role.into(), target);
        self
    }

    pub fn with_state(mut self, state: ServiceState) -> Self {
        self.state = state;
        self
    }

    /// Read a characteristic; absent keys are `None`
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics.get(key).map(String::as_str)
    }

    /// Read a characteristic, treating an absent key as the empty string
    pub fn characteristic_or_empty(&self, key: &str) -> &str {
        self.characteristic(key).unwrap_or("")
    }

    /// Create-or-overwrite a characteristic
    pub fn set_characteristic(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.characteristics.insert(key.into(), value.into());
    }

    /// Look up the target of a role-named reference
    pub fn reference(&self, role: &RoleName) -> Option<ServiceId> {
        self.references.get(role).copied()
    }
}
