//! Snapshot tree flattening.

use vsnap_common::error::InventoryResult;
use vsnap_common::inventory::{Inventory, SnapshotNode, VmRef};

/// Flattens a snapshot forest in depth-first pre-order.
///
/// Each node is emitted before its children, and a node's whole subtree
/// before its next sibling. Uses an explicit stack, so tree depth is bounded
/// only by memory.
pub fn flatten(roots: &[SnapshotNode]) -> Vec<&SnapshotNode> {
    let mut flat: Vec<&SnapshotNode> = Vec::new();
    let mut stack: Vec<&SnapshotNode> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        flat.push(node);
        stack.extend(node.children.iter().rev());
    }

    flat
}

/// Every snapshot of one VM, still shaped as a forest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotForest {
    pub roots: Vec<SnapshotNode>,
}

impl SnapshotForest {
    pub fn flatten(&self) -> Vec<&SnapshotNode> {
        flatten(&self.roots)
    }

    pub fn count(&self) -> usize {
        self.flatten().len()
    }
}

/// Reads a VM's snapshot forest. A VM without snapshot data yields an empty forest.
pub async fn all_snapshots_of(
    inventory: &dyn Inventory,
    vm: &VmRef,
) -> InventoryResult<SnapshotForest> {
    let roots = inventory.snapshot_roots(vm).await?.unwrap_or_default();
    Ok(SnapshotForest { roots })
}
