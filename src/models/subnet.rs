//! Subnet requests and the records produced for them.

use super::NetworkBlock;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One link's host requirement, as given by the caller.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRequest {
    /// Position in the caller's original list.
    pub ordinal: usize,
    /// Usable hosts the subnet must hold.
    pub hosts_required: i64,
}

impl SubnetRequest {
    pub fn new(ordinal: usize, hosts_required: i64) -> Self {
        SubnetRequest {
            ordinal,
            hosts_required,
        }
    }
}

/// A carved subnet with its derived addressing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocatedSubnet {
    /// Display label, e.g. `Red 1`.
    pub id: String,
    /// The subnet itself, serialised as `address/prefix`.
    pub block: NetworkBlock,
    /// Hosts asked for; `None` for fixed-size partitions.
    pub hosts_required: Option<i64>,
    /// Usable hosts the block can hold.
    pub hosts_capacity: u64,
    pub netmask: Ipv4Addr,
    pub first_usable: Option<Ipv4Addr>,
    pub last_usable: Option<Ipv4Addr>,
    pub broadcast: Ipv4Addr,
}

impl AllocatedSubnet {
    pub fn new(id: String, block: NetworkBlock, hosts_required: Option<i64>) -> Self {
        AllocatedSubnet {
            id,
            block,
            hosts_required,
            hosts_capacity: block.usable_hosts(),
            netmask: block.netmask(),
            first_usable: block.first_usable(),
            last_usable: block.last_usable(),
            broadcast: block.broadcast(),
        }
    }

    pub fn network(&self) -> Ipv4Addr {
        self.block.network()
    }

    pub fn prefix(&self) -> u8 {
        self.block.prefix()
    }
}

/// Outcome of a VLSM allocation.
///
/// Requests that could not be served are not fatal; they are counted here.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationResult {
    /// Allocated subnets, largest requirement first.
    pub subnets: Vec<AllocatedSubnet>,
    /// Entries supplied by the caller, valid or not.
    pub requested: usize,
    /// Entries dropped as non-numeric or non-positive.
    pub excluded: usize,
    /// Valid requests that no block size or base network could hold.
    pub skipped: usize,
    /// Valid requests left over once the address space ran out.
    pub unserved: usize,
}

impl AllocationResult {
    /// Number of subnets allocated.
    pub fn count(&self) -> usize {
        self.subnets.len()
    }

    /// Sum of usable hosts across all allocated subnets.
    pub fn total_capacity(&self) -> u64 {
        self.subnets.iter().map(|s| s.hosts_capacity).sum()
    }

    /// Did the allocator run out of address space.
    pub fn exhausted(&self) -> bool {
        self.unserved > 0
    }
}

/// Outcome of a fixed-prefix partition.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// The network being divided.
    pub parent: NetworkBlock,
    /// Blocks produced, in address order.
    pub subnets: Vec<AllocatedSubnet>,
    /// Blocks the parent holds from the start address on.
    pub total_blocks: u64,
    /// True when `subnets` stops short of `total_blocks`.
    pub truncated: bool,
}
