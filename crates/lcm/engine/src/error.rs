//! Engine error types

use lcm_inventory::InventoryError;
use lcm_types::{LifecycleEvent, ServiceId};
use thiserror::Error;

/// Errors a rule body can raise
///
/// An unresolved reference is fatal to the invocation; there is no partial
/// retry and no default value. External call failures are NOT errors — the
/// invoker renders them as text the rule stores verbatim.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Internal rule error: {0}")]
    Internal(String),
}

/// Result type for rule bodies
pub type RuleResult<T> = std::result::Result<T, RuleError>;

/// Dispatch errors surfaced to the external orchestrator
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Dispatch target not in inventory: {0}")]
    UnknownService(ServiceId),

    #[error("Rule '{rule}' failed for {service} at {event}: {source}")]
    RuleFailed {
        rule: String,
        service: ServiceId,
        event: LifecycleEvent,
        #[source]
        source: RuleError,
    },
}

/// Result type for dispatch operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;
