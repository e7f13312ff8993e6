//! [`Inventory`] over the vSphere REST API.
//!
//! The REST API has no single "children of the host folder" call, so each
//! folder level is assembled from three listings: clusters, standalone hosts
//! (one [`ComputeGroup::Plain`] each) and child host folders. Within a level
//! groups therefore come back in that order. Only the first folder level below
//! the datacenter is populated; deeper folders appear as empty
//! [`ComputeGroup::Folder`]s.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;
use vsnap_common::error::InventoryResult;
use vsnap_common::inventory::{
    ComputeGroup, Datacenter, Host, HostRef, Inventory, SnapshotNode, VirtualMachine, VmRef,
};

use super::client::VsphereClient;
use super::types::{
    ClusterSummary, DatacenterInfo, DatacenterSummary, FolderSummary, HostConnectionState,
    HostSummary, SnapshotSummary, VmInfo, VmSummary,
};

/// Groups found directly inside one host folder.
struct FolderLevel {
    groups: Vec<ComputeGroup>,
    subfolders: Vec<FolderSummary>,
}

impl VsphereClient {
    async fn folder_level(&self, datacenter: &str, folder: &str) -> InventoryResult<FolderLevel> {
        let mut groups: Vec<ComputeGroup> = Vec::new();

        let clusters: Vec<ClusterSummary> = self
            .get_with_params(
                "/api/vcenter/cluster",
                &[("datacenters", datacenter), ("folders", folder)],
            )
            .await?;
        for cluster in clusters {
            let members: Vec<HostSummary> = self
                .get_with_params("/api/vcenter/host", &[("clusters", cluster.cluster.as_str())])
                .await?;
            groups.push(ComputeGroup::Cluster {
                id: cluster.cluster,
                name: cluster.name,
                hosts: self.hosts(members).await?,
            });
        }

        let standalone: Vec<HostSummary> = self
            .get_with_params(
                "/api/vcenter/host",
                &[("datacenters", datacenter), ("folders", folder), ("standalone", "true")],
            )
            .await?;
        for summary in standalone {
            let host = self.host(summary).await?;
            groups.push(ComputeGroup::Plain {
                id: host.reference.0.clone(),
                name: host.name.clone(),
                hosts: vec![host],
            });
        }

        let subfolders: Vec<FolderSummary> = self
            .get_with_params(
                "/api/vcenter/folder",
                &[("type", "HOST"), ("datacenters", datacenter), ("parent_folders", folder)],
            )
            .await?;

        Ok(FolderLevel { groups, subfolders })
    }

    async fn hosts(&self, summaries: Vec<HostSummary>) -> InventoryResult<Vec<Host>> {
        let mut hosts = Vec::with_capacity(summaries.len());
        for summary in summaries {
            hosts.push(self.host(summary).await?);
        }
        Ok(hosts)
    }

    /// VMs are only listed for connected hosts; the others are filtered out later anyway.
    async fn host(&self, summary: HostSummary) -> InventoryResult<Host> {
        let vms = if summary.connection_state == HostConnectionState::Connected {
            let listed: Vec<VmSummary> =
                self.get_with_params("/api/vcenter/vm", &[("hosts", summary.host.as_str())]).await?;
            listed.into_iter().map(|vm| VmRef(vm.vm)).collect()
        } else {
            Vec::new()
        };

        Ok(Host {
            reference: HostRef(summary.host),
            name: summary.name,
            connection_state: summary.connection_state.into(),
            vms,
        })
    }
}

#[async_trait]
impl Inventory for VsphereClient {
    async fn datacenters(&self) -> InventoryResult<Vec<Datacenter>> {
        let summaries: Vec<DatacenterSummary> = self.get("/api/vcenter/datacenter").await?;
        Ok(summaries
            .into_iter()
            .map(|dc| Datacenter {
                id: dc.datacenter,
                name: dc.name,
            })
            .collect())
    }

    async fn compute_groups(&self, datacenter: &Datacenter) -> InventoryResult<Vec<ComputeGroup>> {
        let info: DatacenterInfo = self
            .get(&format!("/api/vcenter/datacenter/{}", datacenter.id))
            .await?;
        debug!("Datacenter {} keeps hosts in {}", info.name, info.host_folder);

        let top = self.folder_level(&datacenter.id, &info.host_folder).await?;
        let mut groups = top.groups;

        for folder in top.subfolders {
            let level = self.folder_level(&datacenter.id, &folder.folder).await?;
            let mut children = level.groups;
            children.extend(level.subfolders.into_iter().map(|nested| ComputeGroup::Folder {
                id: nested.folder,
                name: nested.name,
                children: Vec::new(),
            }));
            groups.push(ComputeGroup::Folder {
                id: folder.folder,
                name: folder.name,
                children,
            });
        }

        Ok(groups)
    }

    async fn virtual_machine(&self, vm: &VmRef) -> InventoryResult<VirtualMachine> {
        let info: VmInfo = self.get(&format!("/api/vcenter/vm/{vm}")).await?;
        Ok(VirtualMachine {
            reference: vm.clone(),
            name: info.name,
            power_state: info.power_state.into(),
        })
    }

    async fn snapshot_roots(&self, vm: &VmRef) -> InventoryResult<Option<Vec<SnapshotNode>>> {
        match self.get::<Vec<SnapshotSummary>>(&format!("/api/vcenter/vm/{vm}/snapshots")).await {
            Ok(summaries) => Ok(Some(build_forest(summaries))),
            Err(e) if e.is_not_found() => {
                debug!("No snapshot data for {vm}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Rebuilds the snapshot forest from a flat, parent-linked listing.
///
/// Siblings keep their listing order. An entry whose parent is absent from the
/// listing becomes a root.
pub(crate) fn build_forest(summaries: Vec<SnapshotSummary>) -> Vec<SnapshotNode> {
    let index: HashMap<String, usize> = summaries
        .iter()
        .enumerate()
        .map(|(i, s)| (s.snapshot.clone(), i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); summaries.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, summary) in summaries.iter().enumerate() {
        match summary.parent.as_ref().and_then(|p| index.get(p)) {
            Some(&parent) if parent != i => children[parent].push(i),
            _ => roots.push(i),
        }
    }

    let mut slots: Vec<Option<SnapshotNode>> = summaries
        .into_iter()
        .map(|s| {
            let name = s.name.unwrap_or_else(|| s.snapshot.clone());
            Some(SnapshotNode::new(s.snapshot, name))
        })
        .collect();

    // Post-order assembly: a node is finished once all of its children are.
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&i| (i, false)).collect();
    while let Some((i, expanded)) = stack.pop() {
        if expanded {
            let kids: Vec<SnapshotNode> =
                children[i].iter().filter_map(|&c| slots[c].take()).collect();
            if let Some(node) = slots[i].as_mut() {
                node.children = kids;
            }
        } else {
            stack.push((i, true));
            stack.extend(children[i].iter().rev().map(|&c| (c, false)));
        }
    }

    roots.into_iter().filter_map(|i| slots[i].take()).collect()
}
