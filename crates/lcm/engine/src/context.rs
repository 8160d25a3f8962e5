//! The store surface a rule sees while it runs

use lcm_inventory::Inventory;
use lcm_invoker::{ActionInvoker, OutboundRequest};
use lcm_types::{LifecycleEvent, RoleName, ServiceId, ServiceState};
use tracing::info;

use crate::error::RuleResult;
use crate::journal::JournalEntry;

/// Which property family a cross-instance read addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyClass {
    /// The instance's human-readable name
    Name,
    /// A characteristic value
    CharacteristicValue,
}

/// Handles injected into every rule invocation
///
/// All reads and writes go through the inventory, so a supervision rule's
/// effect depends only on current store contents — never on invocation
/// count or wall-clock time.
pub struct RuleContext<'a> {
    inventory: &'a Inventory,
    invoker: &'a dyn ActionInvoker,
    service_id: ServiceId,
    service_name: String,
    service_state: ServiceState,
    event: LifecycleEvent,
    journal: Vec<JournalEntry>,
    outbound_calls: usize,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        inventory: &'a Inventory,
        invoker: &'a dyn ActionInvoker,
        service_id: ServiceId,
        service_name: String,
        service_state: ServiceState,
        event: LifecycleEvent,
    ) -> Self {
        Self {
            inventory,
            invoker,
            service_id,
            service_name,
            service_state,
            event,
            journal: Vec::new(),
            outbound_calls: 0,
        }
    }

    /// Identity of the instance being dispatched
    pub fn service_id(&self) -> ServiceId {
        self.service_id
    }

    /// Human-readable name of the instance being dispatched
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Orchestrator-owned lifecycle state at dispatch time
    pub fn service_state(&self) -> ServiceState {
        self.service_state
    }

    /// The lifecycle event that triggered this invocation
    pub fn event(&self) -> LifecycleEvent {
        self.event
    }

    /// Read a local characteristic; absent keys are `None`
    pub fn local(&self, key: &str) -> RuleResult<Option<String>> {
        Ok(self.inventory.characteristic(&self.service_id, key)?)
    }

    /// Read a local characteristic, treating an absent key as `""`
    pub fn local_or_empty(&self, key: &str) -> RuleResult<String> {
        Ok(self.local(key)?.unwrap_or_default())
    }

    /// Create-or-overwrite a local characteristic
    pub fn set_local(&self, key: &str, value: impl Into<String>) -> RuleResult<()> {
        Ok(self.inventory.set_characteristic(&self.service_id, key, value.into())?)
    }

    /// Read a characteristic through a role-named reference
    ///
    /// Fails with `ReferenceNotFound` when the role is not present on the
    /// owning instance; an absent key on the resolved instance reads as `""`.
    pub fn remote(&self, role: &RoleName, key: &str) -> RuleResult<String> {
        Ok(self
            .inventory
            .remote_characteristic(&self.service_id, role, key)?)
    }

    /// Read a property of a referenced instance by property class
    ///
    /// `Name` reads the instance's name, `CharacteristicValue` reads the
    /// characteristic under `key` (absent reads as `""`).
    pub fn remote_property(
        &self,
        role: &RoleName,
        class: PropertyClass,
        key: &str,
    ) -> RuleResult<String> {
        match class {
            PropertyClass::Name => {
                let target = self.inventory.resolve(&self.service_id, role)?;
                Ok(self
                    .inventory
                    .get(&target)
                    .map(|instance| instance.name)
                    .unwrap_or_default())
            }
            PropertyClass::CharacteristicValue => self.remote(role, key),
        }
    }

    /// Apply characteristic writes to a referenced instance, in order
    ///
    /// Sequential and non-atomic; partial application is corrected only by
    /// supervision re-polling.
    pub fn set_remote_batch(&self, role: &RoleName, pairs: &[(&str, &str)]) -> RuleResult<()> {
        Ok(self
            .inventory
            .set_remote_batch(&self.service_id, role, pairs)?)
    }

    /// Perform the rule's outbound call, returning the opaque response text
    pub fn invoke(&mut self, request: &OutboundRequest) -> String {
        self.outbound_calls += 1;
        self.invoker.invoke(request)
    }

    /// Append a timestamped message to the audit journal
    pub fn log(&mut self, message: impl Into<String>) {
        let entry = JournalEntry::new(message);
        info!(service = %self.service_id, event = %self.event, "{}", entry.message);
        self.journal.push(entry);
    }

    pub(crate) fn outbound_calls(&self) -> usize {
        self.outbound_calls
    }

    pub(crate) fn into_journal(self) -> Vec<JournalEntry> {
        self.journal
    }
}
