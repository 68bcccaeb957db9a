//! Variable-length subnet allocation.
//!
//! Requests are served largest first from a cursor that starts at the
//! classful network of the base address and only ever moves forward, so
//! every block lands right after the previous one.

use super::mask_sizer::minimal_prefix_for;
use crate::error::SubnetError;
use crate::models::{classify_address, AllocatedSubnet, AllocationResult, NetworkBlock, SubnetRequest};
use std::net::Ipv4Addr;

/// Label prefix for VLSM subnets.
const LABEL: &str = "Red";

/// Split a comma separated host list such as `"50, 20,10"`.
///
/// Empty entries are ignored. Entries that are not integers are dropped and
/// counted in the second element of the returned tuple. Non-positive numbers
/// are kept so the allocator can count them as excluded.
pub fn parse_host_requests(text: &str) -> (Vec<SubnetRequest>, usize) {
    let mut requests = Vec::new();
    let mut unparsed = 0;

    for (ordinal, entry) in text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
    {
        match entry.parse::<i64>() {
            Ok(hosts) => requests.push(SubnetRequest::new(ordinal, hosts)),
            Err(_) => unparsed += 1,
        }
    }

    (requests, unparsed)
}

/// Turn plain host counts into requests, keeping their order as ordinals.
pub fn requests_from_counts(hosts: &[i64]) -> Vec<SubnetRequest> {
    hosts
        .iter()
        .enumerate()
        .map(|(ordinal, &hosts)| SubnetRequest::new(ordinal, hosts))
        .collect()
}

/// Allocate one right-sized subnet per request inside the address space that
/// starts at the classful network of `base`.
///
/// Fails only when `base` is not a class A/B/C address. Bad entries, requests
/// that cannot be sized, and requests left over once the 32-bit space runs
/// out are counted on the result instead.
pub fn allocate(base: Ipv4Addr, requests: &[SubnetRequest]) -> Result<AllocationResult, SubnetError> {
    let (_, class_prefix) = classify_address(base)?;

    let mut result = AllocationResult {
        requested: requests.len(),
        ..Default::default()
    };

    let mut pending: Vec<SubnetRequest> = requests
        .iter()
        .filter(|r| r.hosts_required > 0)
        .copied()
        .collect();
    result.excluded = requests.len() - pending.len();

    // Largest first, caller order on ties
    pending.sort_by(|a, b| {
        b.hosts_required
            .cmp(&a.hosts_required)
            .then(a.ordinal.cmp(&b.ordinal))
    });

    let mut cursor = Some(NetworkBlock::new(base, class_prefix)?);

    for (i, request) in pending.iter().enumerate() {
        let Some(current) = cursor else {
            result.unserved = pending.len() - i;
            break;
        };

        // Blocks only shrink after the first one, so a prefix shorter than
        // the cursor's can only mean a block bigger than the base network.
        let prefix = match minimal_prefix_for(request.hosts_required) {
            Ok(prefix) if prefix >= current.prefix() => prefix,
            _ => {
                result.skipped += 1;
                continue;
            }
        };

        let block = NetworkBlock::new(current.network(), prefix)?;
        // numbered over served requests only
        let id = format!("{LABEL} {}", result.subnets.len() + 1);
        result
            .subnets
            .push(AllocatedSubnet::new(id, block, Some(request.hosts_required)));

        cursor = block.advance().ok();
    }

    Ok(result)
}
