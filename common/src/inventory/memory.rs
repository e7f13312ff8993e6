//! An [`Inventory`] held entirely in memory.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{ComputeGroup, Datacenter, Inventory, SnapshotNode, VirtualMachine, VmRef};
use crate::error::{InventoryError, InventoryResult};

#[derive(Debug, Default, Clone)]
pub struct MemoryInventory {
    datacenters: Vec<(Datacenter, Vec<ComputeGroup>)>,
    vms: HashMap<VmRef, VirtualMachine>,
    snapshots: HashMap<VmRef, Vec<SnapshotNode>>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datacenter(mut self, datacenter: Datacenter, groups: Vec<ComputeGroup>) -> Self {
        self.datacenters.push((datacenter, groups));
        self
    }

    /// Registers a VM. `snapshots: None` models a VM without snapshot data.
    pub fn with_vm(mut self, vm: VirtualMachine, snapshots: Option<Vec<SnapshotNode>>) -> Self {
        if let Some(roots) = snapshots {
            self.snapshots.insert(vm.reference.clone(), roots);
        }
        self.vms.insert(vm.reference.clone(), vm);
        self
    }
}

#[async_trait]
impl Inventory for MemoryInventory {
    async fn datacenters(&self) -> InventoryResult<Vec<Datacenter>> {
        Ok(self.datacenters.iter().map(|(dc, _)| dc.clone()).collect())
    }

    async fn compute_groups(&self, datacenter: &Datacenter) -> InventoryResult<Vec<ComputeGroup>> {
        self.datacenters
            .iter()
            .find(|(dc, _)| dc.id == datacenter.id)
            .map(|(_, groups)| groups.clone())
            .ok_or_else(|| InventoryError::NotFound(format!("datacenter {}", datacenter.id)))
    }

    async fn virtual_machine(&self, vm: &VmRef) -> InventoryResult<VirtualMachine> {
        self.vms
            .get(vm)
            .cloned()
            .ok_or_else(|| InventoryError::NotFound(format!("virtual machine {vm}")))
    }

    async fn snapshot_roots(&self, vm: &VmRef) -> InventoryResult<Option<Vec<SnapshotNode>>> {
        if !self.vms.contains_key(vm) {
            return Err(InventoryError::NotFound(format!("virtual machine {vm}")));
        }
        Ok(self.snapshots.get(vm).cloned())
    }
}
