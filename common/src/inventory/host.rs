use std::fmt;

use super::vm::VmRef;

/// Opaque managed-object id of a host (e.g. `host-42`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostRef(pub String);

impl fmt::Display for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
    NotResponding,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub reference: HostRef,
    pub name: String,
    pub connection_state: ConnectionState,
    /// VMs registered on this host, in inventory order.
    pub vms: Vec<VmRef>,
}

impl Host {
    pub fn is_connected(&self) -> bool {
        self.connection_state == ConnectionState::Connected
    }
}
