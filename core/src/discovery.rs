//! # Host Discovery
//!
//! Turns the grouping objects under each datacenter into a flat list of
//! connected hosts.
//!
//! Folders are entered exactly one level deep. A host reachable through two
//! groups is reported twice; no identity-based deduplication is attempted.

use tracing::{debug, warn};
use vsnap_common::error::InventoryResult;
use vsnap_common::inventory::{ComputeGroup, Host, Inventory};

pub struct HostDiscoverer<'a> {
    inventory: &'a dyn Inventory,
}

impl<'a> HostDiscoverer<'a> {
    pub fn new(inventory: &'a dyn Inventory) -> Self {
        Self { inventory }
    }

    /// Collects every connected host, in datacenter × group × host order.
    pub async fn discover_hosts(&self) -> InventoryResult<Vec<Host>> {
        let mut hosts: Vec<Host> = Vec::new();

        for datacenter in self.inventory.datacenters().await? {
            debug!("Walking datacenter {}", datacenter.name);
            for group in self.inventory.compute_groups(&datacenter).await? {
                collect_group(&group, &mut hosts);
            }
        }

        Ok(hosts)
    }
}

fn collect_group(group: &ComputeGroup, hosts: &mut Vec<Host>) {
    match group {
        ComputeGroup::Cluster { hosts: members, .. }
        | ComputeGroup::Plain { hosts: members, .. } => {
            push_connected(members, hosts);
        }
        ComputeGroup::Folder { name, children, .. } => {
            debug!("Entering folder {name}");
            for child in children {
                match child.direct_hosts() {
                    Some(members) => push_connected(members, hosts),
                    None => warn!(
                        "Skipping: {} inside folder {name} holds no hosts directly",
                        child.name()
                    ),
                }
            }
        }
        ComputeGroup::Unknown { name, kind, .. } => {
            warn!("Skipping: {name} ({kind}) as it is not a host container");
        }
    }
}

fn push_connected(members: &[Host], hosts: &mut Vec<Host>) {
    for host in members {
        if host.is_connected() {
            hosts.push(host.clone());
        } else {
            debug!("Ignoring host {} ({:?})", host.name, host.connection_state);
        }
    }
}
