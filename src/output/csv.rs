//! CSV style tables for calculation results.

use super::terminal::format_field;
use crate::models::{AllocatedSubnet, AllocationResult, Partition};
use crate::processing::HostSummary;

const SUBNET_HEADER: &str = r#"   "id",       "subnet_cidr",        "netmask", "hosts",     "first_ip",      "last_ip",    "broadcast""#;

/// Header plus one row per allocated subnet.
pub fn allocation_rows(result: &AllocationResult) -> Vec<String> {
    log::debug!(
        "allocation_rows() count={} requested={}",
        result.count(),
        result.requested
    );
    let mut rows = vec![SUBNET_HEADER.to_string()];
    rows.extend(result.subnets.iter().map(subnet_row));
    rows
}

/// Header plus one row per partition block.
pub fn partition_rows(partition: &Partition) -> Vec<String> {
    log::debug!(
        "partition_rows() parent={} total_blocks={}",
        partition.parent,
        partition.total_blocks
    );
    let mut rows = vec![SUBNET_HEADER.to_string()];
    rows.extend(partition.subnets.iter().map(subnet_row));
    rows
}

/// Network and broadcast rows followed by one row per listed host.
pub fn host_rows(summary: &HostSummary) -> Vec<String> {
    let mut rows = vec![
        format!("{},{}", format_field("network", 11), format_field(summary.network, 18)),
        format!("{},{}", format_field("broadcast", 11), format_field(summary.broadcast, 18)),
        format!("{},{}", format_field("hosts", 11), format_field(summary.total_hosts, 18)),
    ];
    rows.extend(
        summary
            .hosts
            .iter()
            .enumerate()
            .map(|(i, host)| format!("{},{}", format_field(i + 1, 11), format_field(host, 18))),
    );
    rows
}

/// A single CSV row.
fn subnet_row(subnet: &AllocatedSubnet) -> String {
    let hosts = match subnet.hosts_required {
        Some(required) => format!("{required}/{}", subnet.hosts_capacity),
        None => subnet.hosts_capacity.to_string(),
    };
    let or_none = |addr: Option<std::net::Ipv4Addr>| addr.map_or("None".to_string(), |a| a.to_string());

    format!(
        "{id},{subnet_cidr},{netmask},{hosts},{first_ip},{last_ip},{broadcast}",
        id = format_field(&subnet.id, 9),
        subnet_cidr = format_field(subnet.block, 20),
        netmask = format_field(subnet.netmask, 18),
        hosts = format_field(hosts, 9),
        first_ip = format_field(or_none(subnet.first_usable), 16),
        last_ip = format_field(or_none(subnet.last_usable), 16),
        broadcast = format_field(subnet.broadcast, 16),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{allocate, partition, requests_from_counts, summarize};
    use std::net::Ipv4Addr;

    #[test]
    fn test_allocation_rows() {
        let result = allocate(
            Ipv4Addr::new(192, 168, 1, 0),
            &requests_from_counts(&[50, 20, 10]),
        )
        .unwrap();
        let rows = allocation_rows(&result);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            r#"  "Red 1",    "192.168.1.0/26", "255.255.255.192",  "50/62",   "192.168.1.1",  "192.168.1.62",  "192.168.1.63""#
        );
    }

    #[test]
    fn test_partition_rows_without_hosts() {
        let split = partition(Ipv4Addr::new(192, 168, 1, 0), 31, 2).unwrap();
        let rows = partition_rows(&split);
        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains(r#""None""#));
        assert!(rows[2].contains(r#""192.168.1.2/31""#));
    }

    #[test]
    fn test_host_rows() {
        let summary = summarize("192.168.1.0/30".parse().unwrap(), 10);
        let rows = host_rows(&summary);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], r#"  "network",     "192.168.1.0""#);
        assert_eq!(rows[4], r#"        "2",     "192.168.1.2""#);
    }
}
