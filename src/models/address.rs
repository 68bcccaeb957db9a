//! Dotted-decimal parsing and positional rendering of IPv4 addresses.
//!
//! [`parse_address`] is the only place where address text becomes an
//! [`Ipv4Addr`]; everything downstream works on the parsed value.

use crate::error::SubnetError;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of octets in an IPv4 address.
const OCTETS: usize = 4;

/// Parse four dot separated decimal octets, each in `0..=255` without
/// leading zeros.
///
/// # Examples
/// ```
/// use vlsm_subnet_calc::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_address("10.0.0").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let invalid = || SubnetError::InvalidAddress(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != OCTETS {
        return Err(invalid());
    }

    let mut octets = [0u8; OCTETS];
    for (octet, part) in octets.iter_mut().zip(parts) {
        // u8::from_str would accept a leading '+'
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(invalid());
        }
        *octet = part.parse::<u8>().map_err(|_| invalid())?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Canonical dotted-decimal form.
pub fn to_decimal(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Each octet as 8 zero-padded binary digits, dot separated.
pub fn to_binary_octets(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Each octet as 2 zero-padded lowercase hex digits, dot separated.
pub fn to_hex_octets(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:02x}")).join(".")
}

/// Read back the output of [`to_binary_octets`].
pub fn parse_binary_octets(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let invalid = || SubnetError::InvalidAddress(text.to_string());

    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != OCTETS {
        return Err(invalid());
    }

    let mut octets = [0u8; OCTETS];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if part.len() != 8 || !part.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(invalid());
        }
        *octet = u8::from_str_radix(part, 2).map_err(|_| invalid())?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Positional base an address can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Decimal,
    Binary,
    Hex,
}

impl Radix {
    /// Render `addr` in this base.
    pub fn render(self, addr: Ipv4Addr) -> String {
        match self {
            Radix::Decimal => to_decimal(addr),
            Radix::Binary => to_binary_octets(addr),
            Radix::Hex => to_hex_octets(addr),
        }
    }
}

impl FromStr for Radix {
    type Err = SubnetError;

    /// Accepts the name, its common abbreviation or the numeric base.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" | "10" => Ok(Radix::Decimal),
            "binary" | "bin" | "2" => Ok(Radix::Binary),
            "hex" | "hexadecimal" | "16" => Ok(Radix::Hex),
            _ => Err(SubnetError::InvalidRadix(s.to_string())),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Decimal => "decimal",
            Radix::Binary => "binary",
            Radix::Hex => "hex",
        };
        f.write_str(name)
    }
}
