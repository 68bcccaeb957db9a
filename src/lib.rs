//! IPv4 subnet calculator: classful default masks, VLSM allocation,
//! fixed-length subnetting, host enumeration and address reformatting.
//!
//! The functions in this file take caller text, parse it once into typed
//! values and hand those to [`processing`]. Every call is independent.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod plan;
pub mod processing;

pub use error::SubnetError;
pub use processing::minimal_prefix_for;

use models::{
    classify_address, parse_address, parse_mask, AddressClass, AllocationResult, NetworkBlock,
    Partition, Radix,
};
use processing::{allocate, parse_host_requests, partition, requests_from_counts, summarize, HostSummary};

/// Address class and default prefix of a dotted-decimal address.
///
/// Malformed text is reported as an unsupported class, like any other
/// address outside the A/B/C ranges.
pub fn classify(address: &str) -> Result<(AddressClass, u8), SubnetError> {
    classify_address(parse_base(address)?)
}

/// Parse an address whose class drives the calculation.
fn parse_base(address: &str) -> Result<std::net::Ipv4Addr, SubnetError> {
    parse_address(address).map_err(|_| SubnetError::UnsupportedAddressClass(address.to_string()))
}

/// VLSM allocation from the classful network of `base`, one subnet per
/// host count, largest first.
pub fn allocate_vlsm(base: &str, hosts: &[i64]) -> Result<AllocationResult, SubnetError> {
    allocate(parse_base(base)?, &requests_from_counts(hosts))
}

/// Same as [`allocate_vlsm`] for a comma separated host list; entries that
/// are not integers are counted as excluded.
pub fn allocate_vlsm_text(base: &str, hosts: &str) -> Result<AllocationResult, SubnetError> {
    let base = parse_base(base)?;
    let (requests, unparsed) = parse_host_requests(hosts);

    let mut result = allocate(base, &requests)?;
    result.requested += unparsed;
    result.excluded += unparsed;
    Ok(result)
}

/// Equal-size blocks of `mask` covering the rest of the network `base` sits
/// in, producing at most `max_blocks`.
pub fn partition_fixed(base: &str, mask: &str, max_blocks: usize) -> Result<Partition, SubnetError> {
    let base = parse_address(base)?;
    let prefix = parse_mask(mask)?;
    partition(base, prefix, max_blocks)
}

/// Network, broadcast and up to `max_hosts` usable hosts of `base/mask`.
pub fn enumerate_hosts(base: &str, mask: &str, max_hosts: usize) -> Result<HostSummary, SubnetError> {
    let base = parse_address(base)?;
    let prefix = parse_mask(mask)?;
    Ok(summarize(NetworkBlock::new(base, prefix)?, max_hosts))
}

/// Render a dotted-decimal address in another base.
pub fn reformat(address: &str, target: Radix) -> Result<String, SubnetError> {
    Ok(target.render(parse_address(address)?))
}
