//! Inventory error types

use lcm_types::{RoleName, ServiceId};
use thiserror::Error;

/// Inventory and service-graph errors
///
/// Both variants are fatal to the rule invocation that hit them: there is
/// no partial retry and no default value on the read path.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Reference not found: no role '{role}' on {service}")]
    ReferenceNotFound { service: ServiceId, role: RoleName },

    #[error("Instance not found: {0}")]
    InstanceNotFound(ServiceId),
}

/// Result type for inventory operations
pub type InventoryResult<T> = std::result::Result<T, InventoryError>;
