//! VLSM plan files.
//!
//! A plan is a JSON document naming a base address and the host count of
//! every link:
//!
//! ```json
//! { "base": "192.168.1.0", "hosts": [50, 20, 10] }
//! ```

use crate::models::AllocationResult;
use crate::SubnetError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Inputs for one VLSM allocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Base address; its class picks the starting network.
    pub base: String,
    /// Required usable hosts per link, in any order.
    pub hosts: Vec<i64>,
}

impl Plan {
    /// Run the allocation this plan describes.
    pub fn allocate(&self) -> Result<AllocationResult, SubnetError> {
        crate::allocate_vlsm(&self.base, &self.hosts)
    }
}

/// Parse a plan from JSON text, reporting the path of any bad field.
pub fn parse_plan(json: &str) -> Result<Plan, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let plan: Plan = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing plan at '{}': {}", e.path(), e.inner()))?;
    Ok(plan)
}

/// Read and parse a plan file.
pub fn read_plan(path: &str) -> Result<Plan, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Plan file does not exist: {path}").into());
    }
    log::info!("Reading plan file: {path}");

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading plan file {path}: {e}"))?;
    parse_plan(&json)
}
