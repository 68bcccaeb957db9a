//! Output formatting for calculation results.
//!
//! This module handles presenting results:
//! - [`format`] - decimal/binary/hex presentation bundles
//! - [`csv`] - CSV style tables
//! - [`terminal`] - terminal helpers with colors

mod csv;
mod format;
mod terminal;

pub use csv::{allocation_rows, host_rows, partition_rows};
pub use format::{AddressForms, AllocationReport, HostReport, PartitionReport, SubnetReport};
pub use terminal::{error_line, format_field, header, note_line};
