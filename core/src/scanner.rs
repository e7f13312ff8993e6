//! # Snapshot Scanner
//!
//! Finds powered-on VMs that carry at least one snapshot.
//!
//! Hosts come from [`HostDiscoverer`]; each VM on a host is read, filtered on
//! power state, and its snapshot forest counted. Reads happen one at a time,
//! in discovery order, and the first failed read aborts the scan.

use tracing::debug;
use vsnap_common::error::InventoryResult;
use vsnap_common::inventory::{Inventory, VirtualMachine};

use crate::discovery::HostDiscoverer;
use crate::snapshots;

/// A powered-on VM and how many snapshots it holds (always at least one).
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEntry {
    pub vm: VirtualMachine,
    pub snapshot_count: usize,
}

/// Entries in host-then-VM discovery order.
pub type ScanResult = Vec<ScanEntry>;

pub struct SnapshotScanner<'a> {
    inventory: &'a dyn Inventory,
}

impl<'a> SnapshotScanner<'a> {
    pub fn new(inventory: &'a dyn Inventory) -> Self {
        Self { inventory }
    }

    pub async fn scan(&self) -> InventoryResult<ScanResult> {
        let hosts = HostDiscoverer::new(self.inventory).discover_hosts().await?;
        let mut result: ScanResult = Vec::new();

        for host in &hosts {
            debug!("Scanning {} VMs on host {}", host.vms.len(), host.name);
            for vm_ref in &host.vms {
                let vm = self.inventory.virtual_machine(vm_ref).await?;
                if !vm.is_powered_on() {
                    continue;
                }

                let snapshot_count = snapshots::all_snapshots_of(self.inventory, vm_ref)
                    .await?
                    .count();
                if snapshot_count > 0 {
                    debug!("{} has {snapshot_count} snapshot(s)", vm.name);
                    result.push(ScanEntry { vm, snapshot_count });
                }
            }
        }

        Ok(result)
    }
}

/// Runs a full scan against `inventory`.
pub async fn scan(inventory: &dyn Inventory) -> InventoryResult<ScanResult> {
    SnapshotScanner::new(inventory).scan().await
}
