//! Wire types of the vSphere Automation REST API (`/api/...`).

use serde::Deserialize;
use vsnap_common::inventory::{ConnectionState, PowerState};

#[derive(Debug, Clone, Deserialize)]
pub struct DatacenterSummary {
    pub datacenter: String,
    pub name: String,
}

/// `GET /api/vcenter/datacenter/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatacenterInfo {
    pub name: String,
    pub host_folder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSummary {
    pub cluster: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FolderSummary {
    pub folder: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostConnectionState {
    Connected,
    Disconnected,
    NotResponding,
    #[serde(other)]
    Unknown,
}

impl From<HostConnectionState> for ConnectionState {
    fn from(state: HostConnectionState) -> Self {
        match state {
            HostConnectionState::Connected => Self::Connected,
            HostConnectionState::Disconnected => Self::Disconnected,
            HostConnectionState::NotResponding => Self::NotResponding,
            HostConnectionState::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostSummary {
    pub host: String,
    pub name: String,
    pub connection_state: HostConnectionState,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmPowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl From<VmPowerState> for PowerState {
    fn from(state: VmPowerState) -> Self {
        match state {
            VmPowerState::PoweredOn => Self::PoweredOn,
            VmPowerState::PoweredOff => Self::PoweredOff,
            VmPowerState::Suspended => Self::Suspended,
            VmPowerState::Unknown => Self::Unknown,
        }
    }
}

/// Entry of `GET /api/vcenter/vm`. Name and power state are read later, per VM.
#[derive(Debug, Clone, Deserialize)]
pub struct VmSummary {
    pub vm: String,
}

/// `GET /api/vcenter/vm/{id}`. Only the fields the scan needs.
#[derive(Debug, Clone, Deserialize)]
pub struct VmInfo {
    pub name: String,
    pub power_state: VmPowerState,
}

/// Entry of `GET /api/vcenter/vm/{id}/snapshots`, a flat list linked by `parent`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotSummary {
    pub snapshot: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}
