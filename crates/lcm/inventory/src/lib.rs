//! Service instance inventory: the characteristic store and service graph.
//!
//! Instances are created and destroyed by the external orchestrator; this
//! crate only mirrors them and gives rules read/write access to their
//! characteristics and role-named references. Characteristics are created on
//! first write and last write wins. Cross-instance batched writes are
//! applied sequentially, not atomically: a crash mid-batch leaves some keys
//! updated and others not, and the supervision rules are designed to detect
//! and correct that by re-polling.

mod error;
mod instance;
mod store;

pub use error::{InventoryError, InventoryResult};
pub use instance::ServiceInstance;
pub use store::Inventory;
