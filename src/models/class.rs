//! Legacy classful address ranges and their default prefix lengths.

use crate::error::SubnetError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Address class recognised for default mask inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
}

impl AddressClass {
    /// Natural prefix length of the class.
    pub fn default_prefix(self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
        };
        f.write_str(tag)
    }
}

/// Map an address to its class and default prefix using the first octet.
///
/// `0.x.x.x`, the `127` loopback block and the D/E ranges are rejected.
pub fn classify_address(addr: Ipv4Addr) -> Result<(AddressClass, u8), SubnetError> {
    let class = match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        _ => return Err(SubnetError::UnsupportedAddressClass(addr.to_string())),
    };
    Ok((class, class.default_prefix()))
}
