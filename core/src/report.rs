//! JSON rendering of a [`ScanResult`].

use std::collections::BTreeMap;

use serde::Serialize;
use vsnap_common::config::ReportMode;

use crate::scanner::ScanResult;

#[derive(Serialize)]
struct DiscoveryReport<'a> {
    data: Vec<DiscoveryEntry<'a>>,
}

#[derive(Serialize)]
struct DiscoveryEntry<'a> {
    #[serde(rename = "{#VMNAME}")]
    vm_name: &'a str,
}

#[derive(Serialize)]
struct CountReport<'a> {
    vms: BTreeMap<&'a str, usize>,
}

/// Renders `result` in the requested shape.
pub fn render(result: &ScanResult, mode: ReportMode) -> serde_json::Result<String> {
    match mode {
        ReportMode::Discovery => discovery(result),
        ReportMode::Count => counts(result),
    }
}

/// `{"data":[{"{#VMNAME}":"web1"},...]}` in scan order. Counts are dropped.
pub fn discovery(result: &ScanResult) -> serde_json::Result<String> {
    let report = DiscoveryReport {
        data: result
            .iter()
            .map(|entry| DiscoveryEntry {
                vm_name: &entry.vm.name,
            })
            .collect(),
    };
    serde_json::to_string(&report)
}

/// `{"vms":{"web1":2,...}}`. When two VMs share a name the later one wins.
pub fn counts(result: &ScanResult) -> serde_json::Result<String> {
    let mut vms: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in result {
        vms.insert(&entry.vm.name, entry.snapshot_count);
    }
    serde_json::to_string(&CountReport { vms })
}
