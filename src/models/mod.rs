//! Value types for IPv4 subnet calculations.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`address`] - dotted-decimal parsing and binary/hex rendering
//! - [`class`] - classful address ranges
//! - [`NetworkBlock`] - an aligned address/prefix pair
//! - [`mask`] - prefix and netmask parsing
//! - [`SubnetRequest`], [`AllocatedSubnet`] - allocation inputs and outputs

mod address;
mod block;
mod class;
mod mask;
mod subnet;

// Re-export public types
pub use address::{
    parse_address, parse_binary_octets, to_binary_octets, to_decimal, to_hex_octets, Radix,
};
pub use block::{cut_addr, get_cidr_mask, NetworkBlock, MAX_LENGTH};
pub use class::{classify_address, AddressClass};
pub use mask::{netmask_for_prefix, parse_mask, prefix_from_netmask};
pub use subnet::{AllocatedSubnet, AllocationResult, Partition, SubnetRequest};
