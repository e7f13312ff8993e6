use vsnap_common::config::ReportMode;
use vsnap_common::inventory::memory::MemoryInventory;
use vsnap_common::inventory::{ComputeGroup, ConnectionState, PowerState};
use vsnap_core::discovery::HostDiscoverer;
use vsnap_core::{report, scanner};

use crate::fixtures::*;

#[tokio::test]
async fn two_hosts_report_only_the_running_vm_with_snapshots() {
    let inventory = two_host_inventory();

    let result = scanner::scan(&inventory).await.unwrap();
    assert_eq!(name_counts(&result), vec![("web1", 2)]);

    assert_eq!(
        report::render(&result, ReportMode::Discovery).unwrap(),
        r#"{"data":[{"{#VMNAME}":"web1"}]}"#
    );
    assert_eq!(report::render(&result, ReportMode::Count).unwrap(), r#"{"vms":{"web1":2}}"#);
}

#[tokio::test]
async fn repeated_scans_render_identically() {
    let inventory = two_host_inventory();

    let first = scanner::scan(&inventory).await.unwrap();
    let second = scanner::scan(&inventory).await.unwrap();
    assert_eq!(first, second);

    let first = report::render(&first, ReportMode::Count).unwrap();
    let second = report::render(&second, ReportMode::Count).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn folder_sums_hosts_of_its_groups() {
    let inventory = MemoryInventory::new().with_datacenter(
        datacenter("dc1"),
        vec![folder(
            "site-b",
            vec![
                cluster("c1", vec![host("h1", &[]), host("h2", &[])]),
                cluster(
                    "c2",
                    vec![
                        host("h3", &[]),
                        host_in_state("h4", ConnectionState::Disconnected, &[]),
                    ],
                ),
                plain(host("h5", &[])),
            ],
        )],
    );

    let hosts = HostDiscoverer::new(&inventory).discover_hosts().await.unwrap();
    let names: Vec<&str> = hosts.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["h1", "h2", "h3", "h5"]);
}

#[tokio::test]
async fn mixed_topology_across_datacenters() {
    let inventory = MemoryInventory::new()
        .with_datacenter(
            datacenter("dc1"),
            vec![
                plain(host("lab", &["vm-10"])),
                ComputeGroup::Unknown {
                    id: "resgroup-9".into(),
                    name: "pool".into(),
                    kind: "ResourcePool".into(),
                },
                folder("racks", vec![cluster("r1", vec![host("r1a", &["vm-11"])])]),
            ],
        )
        .with_datacenter(
            datacenter("dc2"),
            vec![cluster("dr", vec![host("dr1", &["vm-12", "vm-13"])])],
        )
        .with_vm(
            vm("vm-10", "lab-box", PowerState::PoweredOn),
            Some(vec![snapshot("a", vec![])]),
        )
        .with_vm(
            vm("vm-11", "rack-app", PowerState::PoweredOn),
            Some(vec![snapshot(
                "b",
                vec![snapshot("c", vec![]), snapshot("d", vec![snapshot("e", vec![])])],
            )]),
        )
        .with_vm(
            vm("vm-12", "dr-db", PowerState::Suspended),
            Some(vec![snapshot("f", vec![])]),
        )
        .with_vm(vm("vm-13", "dr-web", PowerState::PoweredOn), None);

    let result = scanner::scan(&inventory).await.unwrap();
    assert_eq!(name_counts(&result), vec![("lab-box", 1), ("rack-app", 4)]);

    assert_eq!(
        report::render(&result, ReportMode::Discovery).unwrap(),
        r#"{"data":[{"{#VMNAME}":"lab-box"},{"{#VMNAME}":"rack-app"}]}"#
    );
}

#[tokio::test]
async fn empty_inventory_renders_empty_documents() {
    let result = scanner::scan(&MemoryInventory::new()).await.unwrap();
    assert_eq!(
        report::render(&result, ReportMode::Discovery).unwrap(),
        r#"{"data":[]}"#
    );
    assert_eq!(report::render(&result, ReportMode::Count).unwrap(), r#"{"vms":{}}"#);
}
