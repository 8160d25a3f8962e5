//! In-memory inventory and service-graph resolution

use dashmap::DashMap;
use lcm_types::{RoleName, ServiceId, ServiceState};
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::instance::ServiceInstance;

/// In-memory view of the orchestrator inventory
///
/// The orchestrator owns the instances; this map mirrors them for rule
/// evaluation. Reads clone the instance snapshot; writes go through the
/// mutating accessors so every store mutation has one code path.
#[derive(Debug, Default)]
pub struct Inventory {
    instances: DashMap<ServiceId, ServiceInstance>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
        }
    }

    /// Register an instance, returning its id
    pub fn insert(&self, instance: ServiceInstance) -> ServiceId {
        let id = instance.id;
        self.instances.insert(id, instance);
        id
    }

    /// Remove an instance (orchestrator-driven teardown)
    pub fn remove(&self, id: &ServiceId) -> Option<ServiceInstance> {
        self.instances.remove(id).map(|(_, instance)| instance)
    }

    /// Snapshot an instance by id
    pub fn get(&self, id: &ServiceId) -> Option<ServiceInstance> {
        self.instances.get(id).map(|entry| entry.clone())
    }

    pub fn contains(&self, id: &ServiceId) -> bool {
        self.instances.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.instances.len()
    }

    /// Read one characteristic of an instance
    pub fn characteristic(&self, id: &ServiceId, key: &str) -> InventoryResult<Option<String>> {
        let entry = self
            .instances
            .get(id)
            .ok_or(InventoryError::InstanceNotFound(*id))?;
        Ok(entry.characteristic(key).map(str::to_owned))
    }

    /// Create-or-overwrite one characteristic of an instance
    pub fn set_characteristic(
        &self,
        id: &ServiceId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> InventoryResult<()> {
        let mut entry = self
            .instances
            .get_mut(id)
            .ok_or(InventoryError::InstanceNotFound(*id))?;
        let (key, value) = (key.into(), value.into());
        debug!(service = %id, key = %key, "characteristic written");
        entry.set_characteristic(key, value);
        Ok(())
    }

    /// Resolve a role-named reference of the given instance
    ///
    /// An unknown role and a dangling edge are both fatal; neither falls
    /// back to a default target.
    pub fn resolve(&self, id: &ServiceId, role: &RoleName) -> InventoryResult<ServiceId> {
        let entry = self
            .instances
            .get(id)
            .ok_or(InventoryError::InstanceNotFound(*id))?;
        let target = entry
            .reference(role)
            .ok_or_else(|| InventoryError::ReferenceNotFound {
                service: *id,
                role: role.clone(),
            })?;
        if !self.instances.contains_key(&target) {
            return Err(InventoryError::InstanceNotFound(target));
        }
        Ok(target)
    }

    /// Read a characteristic through a role-named reference
    ///
    /// The remote read path cannot distinguish a missing characteristic
    /// from an empty one, so an absent key on a resolved instance reads as
    /// `""`. Only the unresolved role is an error.
    pub fn remote_characteristic(
        &self,
        id: &ServiceId,
        role: &RoleName,
        key: &str,
    ) -> InventoryResult<String> {
        let target = self.resolve(id, role)?;
        Ok(self.characteristic(&target, key)?.unwrap_or_default())
    }

    /// Apply a batch of characteristic writes through a role-named reference
    ///
    /// The role resolves once, then the pairs apply sequentially in the
    /// given order. There is no atomicity across the batch: a crash between
    /// pairs leaves a partial state that only supervision re-polling
    /// corrects.
    pub fn set_remote_batch(
        &self,
        id: &ServiceId,
        role: &RoleName,
        pairs: &[(&str, &str)],
    ) -> InventoryResult<()> {
        let target = self.resolve(id, role)?;
        for (key, value) in pairs {
            self.set_characteristic(&target, *key, *value)?;
        }
        Ok(())
    }

    /// Mark an instance failed, surfacing a rule error to the orchestrator
    pub fn mark_failed(&self, id: &ServiceId) {
        if let Some(mut entry) = self.instances.get_mut(id) {
            entry.state = ServiceState::Failed;
        }
    }
}
