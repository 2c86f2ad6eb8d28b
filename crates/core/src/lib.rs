//! An RV32I RISC-V instruction set simulator.
//!
//! The crate models a single-hart 32-bit machine: a sparse byte-addressable
//! little-endian [`Memory`], a 32-entry register file with `x0` hardwired to
//! zero, a table-free [`isa::decode`] for the base integer instruction set,
//! and a [`Cpu`] that drives the fetch-decode-execute loop.
//!
//! ```
//! use rv32_core::{Cpu, Memory};
//!
//! // addi x1, x0, 5
//! let mut mem = Memory::new();
//! mem.write_word(0, 0x0050_0093).unwrap();
//!
//! let mut cpu = Cpu::new(mem, 0);
//! cpu.step().unwrap();
//! assert_eq!(cpu.regs.read(1), 5);
//! assert_eq!(cpu.pc, 4);
//! ```

/// Shared primitives: bit-field manipulation and fault types.
pub mod common;

/// Simulation parameters.
pub mod config;

/// The processor: register file and execution engine.
pub mod core;

/// Instruction set definitions: encodings, decoder, disassembler.
pub mod isa;

/// Byte-addressable memory.
pub mod mem;

/// Program loading and machine bring-up.
pub mod sim;

pub use crate::common::Fault;
pub use crate::config::Config;
pub use crate::core::Cpu;
pub use crate::mem::Memory;
