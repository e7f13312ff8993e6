use vsnap_common::inventory::memory::MemoryInventory;
use vsnap_common::inventory::{
    ComputeGroup, ConnectionState, Datacenter, Host, HostRef, PowerState, SnapshotNode,
    VirtualMachine, VmRef,
};
use vsnap_core::scanner::ScanResult;

pub fn datacenter(id: &str) -> Datacenter {
    Datacenter {
        id: id.to_string(),
        name: id.to_uppercase(),
    }
}

pub fn host(name: &str, vms: &[&str]) -> Host {
    host_in_state(name, ConnectionState::Connected, vms)
}

pub fn host_in_state(name: &str, connection_state: ConnectionState, vms: &[&str]) -> Host {
    Host {
        reference: HostRef(format!("host-{name}")),
        name: name.to_string(),
        connection_state,
        vms: vms.iter().map(|id| VmRef(id.to_string())).collect(),
    }
}

pub fn cluster(name: &str, hosts: Vec<Host>) -> ComputeGroup {
    ComputeGroup::Cluster {
        id: format!("domain-c-{name}"),
        name: name.to_string(),
        hosts,
    }
}

pub fn plain(host: Host) -> ComputeGroup {
    ComputeGroup::Plain {
        id: format!("domain-s-{}", host.name),
        name: host.name.clone(),
        hosts: vec![host],
    }
}

pub fn folder(name: &str, children: Vec<ComputeGroup>) -> ComputeGroup {
    ComputeGroup::Folder {
        id: format!("group-h-{name}"),
        name: name.to_string(),
        children,
    }
}

pub fn vm(id: &str, name: &str, power_state: PowerState) -> VirtualMachine {
    VirtualMachine {
        reference: VmRef(id.to_string()),
        name: name.to_string(),
        power_state,
    }
}

pub fn snapshot(id: &str, children: Vec<SnapshotNode>) -> SnapshotNode {
    SnapshotNode::new(id, format!("before {id}")).with_children(children)
}

/// `(vm name, snapshot count)` per entry, in scan order.
pub fn name_counts(result: &ScanResult) -> Vec<(&str, usize)> {
    result
        .iter()
        .map(|entry| (entry.vm.name.as_str(), entry.snapshot_count))
        .collect()
}

/// Host A: web1 (on, 2 snapshots), web2 (off, 1 snapshot). Host B: db1 (on, none).
pub fn two_host_inventory() -> MemoryInventory {
    MemoryInventory::new()
        .with_datacenter(
            datacenter("dc1"),
            vec![cluster("prod", vec![host("a", &["vm-1", "vm-2"]), host("b", &["vm-3"])])],
        )
        .with_vm(
            vm("vm-1", "web1", PowerState::PoweredOn),
            Some(vec![snapshot("s1", vec![snapshot("s2", vec![])])]),
        )
        .with_vm(
            vm("vm-2", "web2", PowerState::PoweredOff),
            Some(vec![snapshot("s3", vec![])]),
        )
        .with_vm(vm("vm-3", "db1", PowerState::PoweredOn), Some(Vec::new()))
}
