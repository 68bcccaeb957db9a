//! Fixed-length subnetting: split a network into equal blocks.

use crate::error::SubnetError;
use crate::models::{classify_address, AllocatedSubnet, NetworkBlock, Partition, MAX_LENGTH};
use std::iter;
use std::net::Ipv4Addr;

/// Label prefix for fixed-size subnets.
const LABEL: &str = "Subred";

/// Network that a fixed-prefix partition divides.
///
/// This is the classful network of `base` when the requested prefix is at
/// least as long as the class default, otherwise the requested block itself.
pub fn partition_parent(base: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, SubnetError> {
    let parent_prefix = match classify_address(base) {
        Ok((_, class_prefix)) if class_prefix <= prefix => class_prefix,
        _ => prefix,
    };
    NetworkBlock::new(base, parent_prefix)
}

/// Consecutive `/prefix` blocks from `base` (normalised) to the end of its
/// parent network, producing at most `max_blocks` of them.
pub fn partition(base: Ipv4Addr, prefix: u8, max_blocks: usize) -> Result<Partition, SubnetError> {
    let parent = partition_parent(base, prefix)?;
    let start = NetworkBlock::new(base, prefix)?;

    let span = u64::from(u32::from(parent.broadcast())) - u64::from(u32::from(start.network())) + 1;
    let total_blocks = span >> (MAX_LENGTH - prefix);

    let take = usize::try_from(total_blocks).map_or(max_blocks, |total| total.min(max_blocks));
    let subnets: Vec<AllocatedSubnet> = iter::successors(Some(start), |block| block.advance().ok())
        .take(take)
        .enumerate()
        .map(|(i, block)| AllocatedSubnet::new(format!("{LABEL} {}", i + 1), block, None))
        .collect();

    Ok(Partition {
        parent,
        truncated: (subnets.len() as u64) < total_blocks,
        subnets,
        total_blocks,
    })
}
