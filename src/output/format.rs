//! Presentation bundles for computed subnets.
//!
//! Every address is rendered in decimal, binary and hexadecimal so the
//! caller can show whichever form it needs without re-deriving anything.

use crate::models::{
    to_binary_octets, to_decimal, to_hex_octets, AllocatedSubnet, AllocationResult, NetworkBlock,
    Partition,
};
use crate::processing::HostSummary;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One address in every supported base.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressForms {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
}

impl AddressForms {
    pub fn new(addr: Ipv4Addr) -> Self {
        AddressForms {
            decimal: to_decimal(addr),
            binary: to_binary_octets(addr),
            hex: to_hex_octets(addr),
        }
    }
}

/// Display bundle for one subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub id: String,
    /// `address/prefix`
    pub cidr: String,
    pub prefix: u8,
    pub hosts_required: Option<i64>,
    pub hosts_capacity: u64,
    pub network: AddressForms,
    pub mask: AddressForms,
    pub first_usable: Option<AddressForms>,
    pub last_usable: Option<AddressForms>,
    pub broadcast: AddressForms,
}

impl From<&AllocatedSubnet> for SubnetReport {
    fn from(subnet: &AllocatedSubnet) -> Self {
        SubnetReport {
            id: subnet.id.clone(),
            cidr: subnet.block.to_string(),
            prefix: subnet.prefix(),
            hosts_required: subnet.hosts_required,
            hosts_capacity: subnet.hosts_capacity,
            network: AddressForms::new(subnet.network()),
            mask: AddressForms::new(subnet.netmask),
            first_usable: subnet.first_usable.map(AddressForms::new),
            last_usable: subnet.last_usable.map(AddressForms::new),
            broadcast: AddressForms::new(subnet.broadcast),
        }
    }
}

/// Display bundle for a VLSM allocation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocationReport {
    pub count: usize,
    pub requested: usize,
    pub excluded: usize,
    pub skipped: usize,
    pub unserved: usize,
    pub total_capacity: u64,
    pub subnets: Vec<SubnetReport>,
}

impl From<&AllocationResult> for AllocationReport {
    fn from(result: &AllocationResult) -> Self {
        AllocationReport {
            count: result.count(),
            requested: result.requested,
            excluded: result.excluded,
            skipped: result.skipped,
            unserved: result.unserved,
            total_capacity: result.total_capacity(),
            subnets: result.subnets.iter().map(SubnetReport::from).collect(),
        }
    }
}

/// Display bundle for a fixed-prefix partition.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PartitionReport {
    pub parent: NetworkBlock,
    pub total_blocks: u64,
    pub truncated: bool,
    pub subnets: Vec<SubnetReport>,
}

impl From<&Partition> for PartitionReport {
    fn from(partition: &Partition) -> Self {
        PartitionReport {
            parent: partition.parent,
            total_blocks: partition.total_blocks,
            truncated: partition.truncated,
            subnets: partition.subnets.iter().map(SubnetReport::from).collect(),
        }
    }
}

/// Display bundle for a host enumeration.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub cidr: String,
    pub network: AddressForms,
    pub mask: AddressForms,
    pub broadcast: AddressForms,
    pub total_hosts: u64,
    pub truncated: bool,
    pub hosts: Vec<String>,
}

impl From<&HostSummary> for HostReport {
    fn from(summary: &HostSummary) -> Self {
        HostReport {
            cidr: summary.block.to_string(),
            network: AddressForms::new(summary.network),
            mask: AddressForms::new(summary.block.netmask()),
            broadcast: AddressForms::new(summary.broadcast),
            total_hosts: summary.total_hosts,
            truncated: summary.truncated,
            hosts: summary.hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::summarize;

    #[test]
    fn test_address_forms() {
        let forms = AddressForms::new(Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(forms.decimal, "255.255.255.192");
        assert_eq!(forms.binary, "11111111.11111111.11111111.11000000");
        assert_eq!(forms.hex, "ff.ff.ff.c0");
    }

    #[test]
    fn test_subnet_report() {
        let block: NetworkBlock = "192.168.1.0/26".parse().unwrap();
        let subnet = AllocatedSubnet::new("Red 1".to_string(), block, Some(50));
        let report = SubnetReport::from(&subnet);

        assert_eq!(report.cidr, "192.168.1.0/26");
        assert_eq!(report.prefix, 26);
        assert_eq!(report.mask.decimal, "255.255.255.192");
        assert_eq!(report.first_usable.unwrap().decimal, "192.168.1.1");
        assert_eq!(report.last_usable.unwrap().decimal, "192.168.1.62");
        assert_eq!(report.broadcast.hex, "c0.a8.01.3f");
    }

    #[test]
    fn test_subnet_report_without_hosts() {
        let block: NetworkBlock = "10.0.0.4/31".parse().unwrap();
        let report = SubnetReport::from(&AllocatedSubnet::new("Subred 1".to_string(), block, None));
        assert_eq!(report.first_usable, None);
        assert_eq!(report.last_usable, None);
        assert_eq!(report.hosts_capacity, 0);
    }

    #[test]
    fn test_host_report_serialises() {
        let summary = summarize("192.168.1.0/30".parse().unwrap(), 10);
        let json = serde_json::to_value(HostReport::from(&summary)).unwrap();
        assert_eq!(json["cidr"], "192.168.1.0/30");
        assert_eq!(json["broadcast"]["decimal"], "192.168.1.3");
        assert_eq!(json["hosts"][1], "192.168.1.2");
        assert_eq!(json["truncated"], false);
    }
}
