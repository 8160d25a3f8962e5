//! Rule dispatch engine.
//!
//! The engine owns the registration table mapping (service kind, lifecycle
//! event) to exactly one rule, and the `RuleContext` a rule sees while it
//! runs: the characteristic store surface, the service graph, the outbound
//! invoker and the audit journal. Dispatch is a single synchronous call per
//! event occurrence; a failing rule marks the instance failed and surfaces
//! the error to the external orchestrator — no implicit retry, no
//! compensation.

mod context;
mod error;
mod journal;
mod registry;

pub use context::{PropertyClass, RuleContext};
pub use error::{EngineError, EngineResult, RuleError, RuleResult};
pub use journal::JournalEntry;
pub use registry::{DispatchReport, RuleRegistry};

/// A lifecycle rule: a pure function of the event, the owning instance and
/// the resolvable graph
///
/// A rule reads and mutates externally-owned state through its context and
/// issues zero or one outbound call. Supervision rules must reconstruct
/// their decision purely from current store contents on every invocation.
pub trait Rule: Send + Sync {
    /// Rule name used in logs and dispatch reports
    fn name(&self) -> &str;

    /// Evaluate the rule against the dispatched instance
    fn evaluate(&self, ctx: &mut RuleContext<'_>) -> RuleResult<()>;
}
