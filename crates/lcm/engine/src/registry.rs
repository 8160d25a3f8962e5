//! Rule registry and dispatch
//!
//! Registrations are keyed by (service kind, lifecycle event) and built
//! once at startup; dispatch is a table lookup, never string comparison
//! per call.

use std::collections::HashMap;
use std::sync::Arc;

use lcm_inventory::Inventory;
use lcm_invoker::ActionInvoker;
use lcm_types::{LifecycleEvent, ServiceId, ServiceKind};
use tracing::{error, info};

use crate::context::RuleContext;
use crate::error::{EngineError, EngineResult};
use crate::journal::JournalEntry;
use crate::Rule;

/// Registration table mapping (kind, event) to exactly one rule
#[derive(Default)]
pub struct RuleRegistry {
    rules: HashMap<(ServiceKind, LifecycleEvent), Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule for a (kind, event) pair
    ///
    /// Re-registering the pair replaces the previous rule; last write wins.
    pub fn register(
        &mut self,
        kind: impl Into<ServiceKind>,
        event: LifecycleEvent,
        rule: Arc<dyn Rule>,
    ) {
        let kind = kind.into();
        let replaced = self
            .rules
            .insert((kind.clone(), event), Arc::clone(&rule))
            .is_some();
        info!(kind = %kind, event = %event, rule = rule.name(), replaced, "rule registered");
    }

    /// Check whether a rule is registered for the pair
    pub fn contains(&self, kind: &ServiceKind, event: LifecycleEvent) -> bool {
        self.rules.contains_key(&(kind.clone(), event))
    }

    /// Number of registered rules
    pub fn count(&self) -> usize {
        self.rules.len()
    }

    /// Dispatch one lifecycle event occurrence for one instance
    ///
    /// Exactly one synchronous rule invocation, or a skip when the pair
    /// carries no rule. A failing rule marks the instance `Failed` and the
    /// error propagates to the caller; the engine never retries.
    pub fn dispatch(
        &self,
        inventory: &Inventory,
        invoker: &dyn ActionInvoker,
        service_id: &ServiceId,
        event: LifecycleEvent,
    ) -> EngineResult<DispatchReport> {
        let instance = inventory
            .get(service_id)
            .ok_or(EngineError::UnknownService(*service_id))?;

        let Some(rule) = self.rules.get(&(instance.kind.clone(), event)) else {
            return Ok(DispatchReport::skipped(*service_id, event));
        };

        let mut ctx = RuleContext::new(
            inventory,
            invoker,
            *service_id,
            instance.name,
            instance.state,
            event,
        );
        match rule.evaluate(&mut ctx) {
            Ok(()) => {
                let outbound_calls = ctx.outbound_calls();
                Ok(DispatchReport {
                    service_id: *service_id,
                    event,
                    rule: Some(rule.name().to_string()),
                    outbound_calls,
                    journal: ctx.into_journal(),
                })
            }
            Err(source) => {
                error!(
                    service = %service_id,
                    event = %event,
                    rule = rule.name(),
                    error = %source,
                    "rule failed; marking instance failed"
                );
                inventory.mark_failed(service_id);
                Err(EngineError::RuleFailed {
                    rule: rule.name().to_string(),
                    service: *service_id,
                    event,
                    source,
                })
            }
        }
    }
}

/// Outcome of one dispatch, with the audit journal the rule produced
#[derive(Debug)]
pub struct DispatchReport {
    pub service_id: ServiceId,
    pub event: LifecycleEvent,
    /// Name of the rule that ran; `None` when the pair carried no rule
    pub rule: Option<String>,
    /// Outbound calls the rule made (zero or one by contract)
    pub outbound_calls: usize,
    pub journal: Vec<JournalEntry>,
}

impl DispatchReport {
    fn skipped(service_id: ServiceId, event: LifecycleEvent) -> Self {
        Self {
            service_id,
            event,
            rule: None,
            outbound_calls: 0,
            journal: Vec::new(),
        }
    }

    /// Whether a rule actually ran
    pub fn rule_ran(&self) -> bool {
        self.rule.is_some()
    }
}
