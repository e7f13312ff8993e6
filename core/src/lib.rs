//! # vsnap core
//!
//! Finds powered-on virtual machines that carry snapshots.
//!
//! * **[`discovery`]**: walks compute groups down to connected hosts.
//! * **[`snapshots`]**: flattens a VM's snapshot forest.
//! * **[`scanner`]**: combines both into a [`scanner::ScanResult`].
//! * **[`report`]**: renders a scan result as monitoring JSON.
//! * **[`vsphere`]**: the vSphere REST client that implements the inventory port.

pub mod discovery;
pub mod report;
pub mod scanner;
pub mod snapshots;
pub mod vsphere;
