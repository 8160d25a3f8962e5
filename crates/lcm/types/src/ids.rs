//! Strongly-typed identifiers for NSLCM entities
//!
//! Instance identities are UUID-based but wrapped in newtype structs for
//! type safety; service kinds and reference roles are catalog-owned names
//! and stay string-backed.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a service instance in the orchestrator inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(Uuid);

impl ServiceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service:{}", self.0)
    }
}

/// Type tag of a service instance, as named by the orchestrator catalog
///
/// The set of kinds is open (it grows with the catalog), so this stays a
/// string newtype rather than an enum. Rules are registered against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceKind(String);

impl ServiceKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind:{}", self.0)
    }
}

impl From<&str> for ServiceKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

/// Name of a reference edge from one service instance to another
///
/// Roles address siblings and dependencies at rule-evaluation time; a read
/// through a role that is not present on the owning instance fails
/// explicitly, it never falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoleName {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_generation() {
        let id1 = ServiceId::generate();
        let id2 = ServiceId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_service_id_display() {
        let id = ServiceId::generate();
        assert!(format!("{}", id).starts_with("service:"));
    }

    #[test]
    fn test_role_name_round_trips_through_serde() {
        let role = RoleName::new("migrate_nsd@OSMv15-ITAv");
        let json = serde_json::to_string(&role).unwrap();
        let back: RoleName = serde_json::from_str(&json).unwrap();
        assert_eq!(role, back);
    }
}
