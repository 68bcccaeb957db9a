//! Aligned IPv4 network blocks and the bit arithmetic behind them.
//!
//! Provides [`NetworkBlock`] for an address/prefix pair normalised to its
//! network boundary, along with the mask helpers used to build it.

use super::address::parse_address;
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidMask(len.to_string()))
    } else {
        Ok(mask_for(len))
    }
}

/// Mask for a prefix already known to be at most [`MAX_LENGTH`].
fn mask_for(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    // widened so a shift by 32 is defined
    ((u32::MAX as u64 >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// An IPv4 network: base address aligned to its prefix length.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Build a block, moving `addr` down to its network boundary.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, SubnetError> {
        Ok(NetworkBlock {
            addr: cut_addr(addr, prefix)?,
            prefix,
        })
    }

    /// Network (lowest) address.
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as a u32.
    pub fn mask_bits(&self) -> u32 {
        // prefix is validated on construction
        mask_for(self.prefix)
    }

    /// Subnet mask in dotted form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// Broadcast (highest) address.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Total number of addresses, network and broadcast included.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Number of usable host addresses, zero for `/31` and `/32`.
    pub fn usable_hosts(&self) -> u64 {
        self.size().saturating_sub(2)
    }

    /// First usable host, if the block has any.
    pub fn first_usable(&self) -> Option<Ipv4Addr> {
        (self.usable_hosts() > 0).then(|| Ipv4Addr::from(u32::from(self.addr) + 1))
    }

    /// Last usable host, if the block has any.
    pub fn last_usable(&self) -> Option<Ipv4Addr> {
        (self.usable_hosts() > 0).then(|| Ipv4Addr::from(u32::from(self.broadcast()) - 1))
    }

    /// The same-size block following this one.
    pub fn advance(&self) -> Result<NetworkBlock, SubnetError> {
        let broadcast = self.broadcast();
        u32::from(broadcast)
            .checked_add(1)
            .map(|next| NetworkBlock {
                addr: Ipv4Addr::from(next),
                prefix: self.prefix,
            })
            .ok_or(SubnetError::AddressSpaceExhausted(broadcast))
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl FromStr for NetworkBlock {
    type Err = SubnetError;

    /// Parse `address/prefix`, e.g. `10.0.0.0/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| SubnetError::InvalidMask(s.to_string()))?;
        let addr = parse_address(addr)?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| SubnetError::InvalidMask(prefix.to_string()))?;
        NetworkBlock::new(addr, prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
