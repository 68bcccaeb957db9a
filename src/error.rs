//! Error type shared by every calculation.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Failures surfaced by the address arithmetic and allocation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Text is not four dot separated decimal octets in `0..=255`.
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    /// First octet falls outside the classful A/B/C ranges.
    #[error("address '{0}' is not a class A, B or C address")]
    UnsupportedAddressClass(String),

    /// Host requirement is not a positive integer.
    #[error("invalid host count: '{0}'")]
    InvalidHostCount(String),

    /// No prefix length can hold the requested number of hosts.
    #[error("{hosts} hosts do not fit in any IPv4 subnet")]
    PrefixOverflow { hosts: i64 },

    /// Text is neither a prefix length nor a contiguous dotted netmask.
    #[error("invalid mask: '{0}'")]
    InvalidMask(String),

    /// Advancing past this address would leave the 32-bit space.
    #[error("address space exhausted after {0}")]
    AddressSpaceExhausted(Ipv4Addr),

    /// Reformat target is not decimal, binary or hexadecimal.
    #[error("unknown radix '{0}', expected decimal, binary or hex")]
    InvalidRadix(String),
}
