//! # Unit Components
//!
//! One test module per library component: bit-field primitives, decoder,
//! disassembler, register file, memory, execution engine, configuration,
//! and the program loader.

/// Bit-field primitive tests.
pub mod bits;

/// Configuration default and JSON parsing tests.
pub mod config;






/// Little-endian memory tests.
pub mod memory;
