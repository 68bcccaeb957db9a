//! Integration tests for vlsm-subnet-calc
//!
//! These tests drive the public text-in operations end to end.

use std::net::Ipv4Addr;
use vlsm_subnet_calc::{
    allocate_vlsm, allocate_vlsm_text, classify, enumerate_hosts, minimal_prefix_for,
    models::{parse_address, parse_binary_octets, to_binary_octets, AddressClass, Radix},
    output::{AllocationReport, PartitionReport},
    partition_fixed, plan, reformat, SubnetError,
};

#[test]
fn test_classify_scenarios() {
    assert_eq!(classify("10.0.0.1").unwrap(), (AddressClass::A, 8));
    assert_eq!(classify("172.31.0.9").unwrap(), (AddressClass::B, 16));
    assert_eq!(classify("200.5.1.1").unwrap(), (AddressClass::C, 24));
    assert!(matches!(
        classify("230.0.0.1"),
        Err(SubnetError::UnsupportedAddressClass(_))
    ));
}

#[test]
fn test_minimal_prefix_scenario() {
    assert_eq!(minimal_prefix_for(30).unwrap(), 27);
    assert!(matches!(
        minimal_prefix_for(0),
        Err(SubnetError::InvalidHostCount(_))
    ));
}

#[test]
fn test_vlsm_scenario() {
    let result = allocate_vlsm("192.168.1.0", &[50, 20, 10]).expect("allocation failed");

    assert_eq!(result.count(), 3);
    let expected = [
        ("Red 1", "192.168.1.0/26", 62, "192.168.1.1", "192.168.1.62", "192.168.1.63"),
        ("Red 2", "192.168.1.64/27", 30, "192.168.1.65", "192.168.1.94", "192.168.1.95"),
        ("Red 3", "192.168.1.96/28", 14, "192.168.1.97", "192.168.1.110", "192.168.1.111"),
    ];
    for (subnet, expected) in result.subnets.iter().zip(expected) {
        let (id, cidr, capacity, first, last, broadcast) = expected;
        assert_eq!(subnet.id, id);
        assert_eq!(subnet.block.to_string(), cidr);
        assert_eq!(subnet.hosts_capacity, capacity);
        assert_eq!(subnet.first_usable.unwrap().to_string(), first);
        assert_eq!(subnet.last_usable.unwrap().to_string(), last);
        assert_eq!(subnet.broadcast.to_string(), broadcast);
    }
}

#[test]
fn test_vlsm_text_matches_list() {
    let from_text = allocate_vlsm_text("192.168.1.0", "10,50,20").unwrap();
    let from_list = allocate_vlsm("192.168.1.0", &[10, 50, 20]).unwrap();
    assert_eq!(from_text, from_list);
}

#[test]
fn test_vlsm_report_json() {
    let result = allocate_vlsm("192.168.1.0", &[50, 20, 10]).unwrap();
    let json = serde_json::to_value(AllocationReport::from(&result)).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["total_capacity"], 106);
    assert_eq!(json["subnets"][0]["cidr"], "192.168.1.0/26");
    assert_eq!(json["subnets"][0]["mask"]["decimal"], "255.255.255.192");
    assert_eq!(json["subnets"][2]["broadcast"]["binary"], "11000000.10101000.00000001.01101111");
}

#[test]
fn test_partition_scenario() {
    let partition = partition_fixed("192.168.1.0", "25", 1024).unwrap();
    let cidrs: Vec<String> = partition.subnets.iter().map(|s| s.block.to_string()).collect();
    assert_eq!(cidrs, vec!["192.168.1.0/25", "192.168.1.128/25"]);

    let dotted = partition_fixed("192.168.1.0", "255.255.255.128", 1024).unwrap();
    assert_eq!(partition, dotted);
}

#[test]
fn test_partition_large_is_bounded() {
    let partition = partition_fixed("10.0.0.0", "/30", 100).unwrap();
    assert_eq!(partition.total_blocks, 4_194_304);
    assert_eq!(partition.subnets.len(), 100);

    let report = PartitionReport::from(&partition);
    assert!(report.truncated);
    assert_eq!(report.subnets[99].cidr, "10.0.1.140/30");
}

#[test]
fn test_hosts_scenario() {
    let summary = enumerate_hosts("192.168.1.0", "30", 4096).unwrap();
    assert_eq!(summary.network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(summary.broadcast, Ipv4Addr::new(192, 168, 1, 3));
    let hosts: Vec<String> = summary.hosts.iter().map(|h| h.to_string()).collect();
    assert_eq!(hosts, vec!["192.168.1.1", "192.168.1.2"]);
}

#[test]
fn test_hosts_normalises_base_and_accepts_netmask() {
    let summary = enumerate_hosts("192.168.1.77", "255.255.255.248", 4096).unwrap();
    assert_eq!(summary.block.to_string(), "192.168.1.72/29");
    assert_eq!(summary.total_hosts, 6);
    assert_eq!(summary.block.hosts().count(), 6);

    assert!(matches!(
        enumerate_hosts("192.168.1.77", "255.255.0.255", 4096),
        Err(SubnetError::InvalidMask(_))
    ));
}

#[test]
fn test_reformat_round_trip() {
    for text in ["192.168.1.5", "0.0.0.0", "255.255.255.255", "10.20.30.40"] {
        let binary = reformat(text, Radix::Binary).unwrap();
        let back = parse_binary_octets(&binary).unwrap();
        assert_eq!(back.to_string(), text);
        assert_eq!(to_binary_octets(parse_address(text).unwrap()), binary);
    }
}

#[test]
fn test_leading_zero_octets_are_rejected() {
    for text in ["192.168.001.010", "010.0.0.1", "1.2.3.04"] {
        assert_eq!(
            reformat(text, Radix::Decimal),
            Err(SubnetError::InvalidAddress(text.to_string()))
        );
    }
    assert!(matches!(
        partition_fixed("192.168.1.0", "255.255.255.000", 10),
        Err(SubnetError::InvalidMask(_))
    ));
}

#[test]
fn test_plan_file() {
    let plan = plan::read_plan("tests/test_data/plan_01.json").expect("Failed to read plan");
    let result = plan.allocate().expect("Failed to allocate plan");

    assert_eq!(result.requested, 7);
    assert_eq!(result.excluded, 1);
    let cidrs: Vec<String> = result.subnets.iter().map(|s| s.block.to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "172.16.0.0/23",
            "172.16.2.0/25",
            "172.16.2.128/26",
            "172.16.2.192/27",
            "172.16.2.224/30",
            "172.16.2.228/30",
        ]
    );
}
