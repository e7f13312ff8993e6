//! # Inventory Port
//!
//! The read-only view of a management domain that the core traverses.
//!
//! The core depends only on the [`Inventory`] trait. Concrete sources (the
//! vSphere REST client in `vsnap-core`, the [`memory::MemoryInventory`] used by
//! tests) implement it. Implementations own the session; the core borrows it
//! for one scan.

use async_trait::async_trait;

use crate::error::InventoryResult;

pub mod group;
pub mod host;
pub mod memory;
pub mod vm;

pub use group::{ComputeGroup, Datacenter};
pub use host::{ConnectionState, Host, HostRef};
pub use vm::{PowerState, SnapshotNode, VirtualMachine, VmRef};

/// A handle onto the object graph of a management domain, already bound to
/// its root.
///
/// Every call is a remote read. Callers await each one before issuing the next.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Top-level containers under the root, in inventory order.
    async fn datacenters(&self) -> InventoryResult<Vec<Datacenter>>;

    /// Compute groups directly under a datacenter's host folder.
    async fn compute_groups(&self, datacenter: &Datacenter) -> InventoryResult<Vec<ComputeGroup>>;

    async fn virtual_machine(&self, vm: &VmRef) -> InventoryResult<VirtualMachine>;

    /// Root snapshots of a VM.
    ///
    /// # Returns
    /// * `Some(roots)` - The VM's snapshot forest (possibly empty).
    /// * `None` - The VM has no snapshot data attached at all.
    async fn snapshot_roots(&self, vm: &VmRef) -> InventoryResult<Option<Vec<SnapshotNode>>>;
}
