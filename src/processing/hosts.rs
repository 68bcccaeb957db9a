//! Usable host addresses of a network block.

use crate::models::NetworkBlock;
use serde::Serialize;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Lazy walk over the usable hosts of a block, network and broadcast
/// excluded. Clone it, or call [`NetworkBlock::hosts`] again, to restart.
#[derive(Debug, Clone)]
pub struct HostIter {
    next: u64,
    end: u64,
}

impl HostIter {
    fn new(block: &NetworkBlock) -> Self {
        let network = u64::from(u32::from(block.network()));
        match block.usable_hosts() {
            0 => HostIter { next: 0, end: 0 },
            count => HostIter {
                next: network + 1,
                end: network + 1 + count,
            },
        }
    }
}

impl Iterator for HostIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.next >= self.end {
            return None;
        }
        let addr = Ipv4Addr::from(self.next as u32);
        self.next += 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        self.next = self.next.saturating_add(n as u64).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for HostIter {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(Ipv4Addr::from(self.end as u32))
    }
}

impl ExactSizeIterator for HostIter {}

impl FusedIterator for HostIter {}

impl NetworkBlock {
    /// Usable host addresses, produced lazily.
    pub fn hosts(&self) -> HostIter {
        HostIter::new(self)
    }
}

/// Network, broadcast and (a bounded prefix of) the host list of a block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostSummary {
    pub block: NetworkBlock,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Usable hosts in the block.
    pub total_hosts: u64,
    /// The first `max_hosts` usable hosts, in address order.
    pub hosts: Vec<Ipv4Addr>,
    /// True when `hosts` stops short of `total_hosts`.
    pub truncated: bool,
}

/// Summarise a block, materialising at most `max_hosts` addresses.
pub fn summarize(block: NetworkBlock, max_hosts: usize) -> HostSummary {
    let hosts: Vec<Ipv4Addr> = block.hosts().take(max_hosts).collect();
    let total_hosts = block.usable_hosts();

    HostSummary {
        block,
        network: block.network(),
        broadcast: block.broadcast(),
        truncated: (hosts.len() as u64) < total_hosts,
        total_hosts,
        hosts,
    }
}
