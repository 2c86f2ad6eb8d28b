//! Simulator configuration.

use serde::{Deserialize, Serialize};

/// Default load address for the data image.
pub const DEFAULT_DATA_BASE: u32 = 0x0010_0000;

/// Tunable parameters for a simulation run.
///
/// Every field has a default, so a JSON configuration file may name only the
/// fields it wants to change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the instruction image is loaded at and execution starts from.
    pub start_pc: u32,
    /// Address the data image is loaded at.
    pub data_base: u32,
    /// Retire at most this many instructions; `None` runs until halt.
    pub max_steps: Option<u64>,
    /// Fault on accesses at or beyond this address; `None` leaves memory
    /// unbounded.
    pub mem_limit: Option<u32>,
    /// Echo each instruction as it executes.
    pub trace_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_pc: 0,
            data_base: DEFAULT_DATA_BASE,
            max_steps: None,
            mem_limit: None,
            trace_instructions: false,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is
    /// malformed or a field has the wrong type.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
