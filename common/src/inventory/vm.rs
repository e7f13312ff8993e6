use std::fmt;

/// Opaque managed-object id of a virtual machine (e.g. `vm-1017`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VmRef(pub String);

impl fmt::Display for VmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualMachine {
    pub reference: VmRef,
    pub name: String,
    pub power_state: PowerState,
}

impl VirtualMachine {
    pub fn is_powered_on(&self) -> bool {
        self.power_state == PowerState::PoweredOn
    }
}

/// One point-in-time capture in a VM's snapshot tree.
///
/// Trees may be arbitrarily deep, so `Clone`, `PartialEq` and `Drop` walk
/// them with a worklist instead of recursing per level.
#[derive(Debug)]
pub struct SnapshotNode {
    pub id: String,
    pub name: String,
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SnapshotNode>) -> Self {
        self.children = children;
        self
    }
}

impl Clone for SnapshotNode {
    fn clone(&self) -> Self {
        // Post-order: a copy is assembled once copies of all its children are on `done`.
        let mut done: Vec<SnapshotNode> = Vec::new();
        let mut stack: Vec<(&SnapshotNode, bool)> = vec![(self, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                let children = done.split_off(done.len() - node.children.len());
                done.push(SnapshotNode {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    children,
                });
            } else {
                stack.push((node, true));
                stack.extend(node.children.iter().rev().map(|child| (child, false)));
            }
        }

        // Only the copy of `self` is left.
        done.remove(0)
    }
}

impl PartialEq for SnapshotNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs: Vec<(&SnapshotNode, &SnapshotNode)> = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.id != b.id || a.name != b.name || a.children.len() != b.children.len() {
                return false;
            }
            pairs.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Drop for SnapshotNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
