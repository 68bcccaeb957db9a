//! Smallest subnet that holds a given number of hosts.

use crate::error::SubnetError;
use crate::models::MAX_LENGTH;

/// Longest prefix whose subnet still holds `hosts_required` usable hosts.
///
/// Two addresses per subnet are reserved for the network and broadcast
/// addresses, so the block needs `ceil(log2(hosts_required + 2))` host bits.
///
/// # Examples
/// ```
/// use vlsm_subnet_calc::processing::minimal_prefix_for;
/// assert_eq!(minimal_prefix_for(30).unwrap(), 27);
/// assert_eq!(minimal_prefix_for(31).unwrap(), 26);
/// ```
pub fn minimal_prefix_for(hosts_required: i64) -> Result<u8, SubnetError> {
    if hosts_required <= 0 {
        return Err(SubnetError::InvalidHostCount(hosts_required.to_string()));
    }

    // bits needed for hosts_required + 1 == ceil(log2(hosts_required + 2))
    let host_bits = u64::BITS - (hosts_required as u64 + 1).leading_zeros();

    if host_bits > u32::from(MAX_LENGTH) {
        return Err(SubnetError::PrefixOverflow {
            hosts: hosts_required,
        });
    }
    Ok(MAX_LENGTH - host_bits as u8)
}
