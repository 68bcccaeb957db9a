//! Subnet calculation logic.
//!
//! This module contains the algorithms that turn validated inputs into subnets:
//! - [`mask_sizer`] - smallest prefix for a host count
//! - [`vlsm`] - largest-first variable-length allocation
//! - [`fixed`] - equal-size partitioning with an output cap
//! - [`hosts`] - lazy usable-host enumeration

mod fixed;
mod hosts;
mod mask_sizer;
mod vlsm;

// Re-export public functions
pub use fixed::{partition, partition_parent};
pub use hosts::{summarize, HostIter, HostSummary};
pub use mask_sizer::minimal_prefix_for;
pub use vlsm::{allocate, parse_host_requests, requests_from_counts};
