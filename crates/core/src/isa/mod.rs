//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code constants, the decoded instruction
//! representation, the decoder, and the disassembler for the RV32I base
//! integer instruction set.

/// Instruction decoding logic for all six instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Function code 3 definitions.
pub mod funct3;

/// Function code 7 definitions.
pub mod funct7;

/// Decoded instruction representation and bit extraction utilities.
pub mod instruction;

/// Major opcode definitions.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Format, Instruction, InstructionBits, Op};
