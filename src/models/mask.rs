//! Prefix length and dotted netmask parsing.

use super::address::parse_address;
use super::block::{get_cidr_mask, MAX_LENGTH};
use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Parse a mask given either as a prefix length (`24`, `/24`) or as a dotted
/// netmask (`255.255.255.0`). Both forms yield the same prefix length.
///
/// # Examples
/// ```
/// use vlsm_subnet_calc::models::parse_mask;
/// assert_eq!(parse_mask("255.255.255.0").unwrap(), 24);
/// assert_eq!(parse_mask("/24").unwrap(), 24);
/// ```
pub fn parse_mask(text: &str) -> Result<u8, SubnetError> {
    let invalid = || SubnetError::InvalidMask(text.to_string());
    let trimmed = text.trim();

    if trimmed.contains('.') {
        let netmask = parse_address(trimmed).map_err(|_| invalid())?;
        return prefix_from_netmask(netmask).ok_or_else(invalid);
    }

    let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(invalid());
    }
    let prefix: u8 = digits.parse().map_err(|_| invalid())?;
    if prefix > MAX_LENGTH {
        return Err(invalid());
    }
    Ok(prefix)
}

/// Prefix length of a netmask, `None` when its one bits are not contiguous.
pub fn prefix_from_netmask(netmask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(netmask);
    let ones = bits.leading_ones();
    (ones + bits.trailing_zeros() == u32::from(MAX_LENGTH)).then_some(ones as u8)
}

/// Dotted netmask for a prefix length.
pub fn netmask_for_prefix(prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    Ok(Ipv4Addr::from(get_cidr_mask(prefix)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mask_forms_agree() {
        for prefix in 0..=MAX_LENGTH {
            let dotted = netmask_for_prefix(prefix).unwrap().to_string();
            assert_eq!(parse_mask(&dotted).unwrap(), prefix, "{dotted}");
            assert_eq!(parse_mask(&prefix.to_string()).unwrap(), prefix);
        }
    }

    #[test]
    fn test_parse_mask_rejects() {
        for text in [
            "", "/", "33", "-1", "24a", "255.0.255.0", "255.255.255", "255.255.255.256", "abc", "100",
            "255.255.255.000", "255.255.0255.0", "08"] {
            assert_eq!(
                parse_mask(text),
                Err(SubnetError::InvalidMask(text.to_string())),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_prefix_from_netmask() {
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 0)), Some(24));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 255)), Some(32));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 0, 0)), Some(0));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 224)), Some(27));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 0, 255)), None);
    }

    #[test]
    fn test_netmask_for_prefix() {
        assert_eq!(netmask_for_prefix(27).unwrap(), Ipv4Addr::new(255, 255, 255, 224));
        assert!(netmask_for_prefix(33).is_err());
    }
}
