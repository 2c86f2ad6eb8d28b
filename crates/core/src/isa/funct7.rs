//! RV32I Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes between operations that
//! share the same `funct3` (ADD vs SUB, SRL vs SRA, SRLI vs SRAI).

/// Default operation (ADD, SRL, SRLI).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate operation (SUB, SRA, SRAI).
/// Bit 5 set selects subtraction / arithmetic shift.
pub const SUB: u32 = 0b010_0000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b010_0000;
