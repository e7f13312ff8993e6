use super::host::Host;

/// A top-level container under the inventory root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datacenter {
    pub id: String,
    pub name: String,
}

/// A node under a datacenter's host folder.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputeGroup {
    /// A cluster compute resource with its member hosts.
    Cluster {
        id: String,
        name: String,
        hosts: Vec<Host>,
    },
    /// A folder of further compute groups.
    Folder {
        id: String,
        name: String,
        children: Vec<ComputeGroup>,
    },
    /// A standalone compute resource.
    Plain {
        id: String,
        name: String,
        hosts: Vec<Host>,
    },
    /// Anything else found under the host folder. `kind` is the source's type name.
    Unknown {
        id: String,
        name: String,
        kind: String,
    },
}

impl ComputeGroup {
    pub fn name(&self) -> &str {
        match self {
            Self::Cluster { name, .. }
            | Self::Folder { name, .. }
            | Self::Plain { name, .. }
            | Self::Unknown { name, .. } => name,
        }
    }

    /// Hosts attached directly to this group. Folders and unknown groups have none.
    pub fn direct_hosts(&self) -> Option<&[Host]> {
        match self {
            Self::Cluster { hosts, .. } | Self::Plain { hosts, .. } => Some(hosts),
            Self::Folder { .. } | Self::Unknown { .. } => None,
        }
    }
}
