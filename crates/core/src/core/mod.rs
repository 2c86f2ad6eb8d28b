//! Core processor implementation.
//!
//! Contains the general-purpose register file and the CPU execution engine
//! that drives the fetch-decode-execute loop.

/// CPU state and execution orchestration.
pub mod cpu;

/// General-purpose register file.
pub mod gpr;

pub use self::cpu::Cpu;
pub use self::gpr::Gpr;
