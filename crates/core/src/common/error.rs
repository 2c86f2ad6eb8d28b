//! Fault definitions.
//!
//! The taxonomy of conditions that stop the fetch-decode-execute loop. Both
//! variants are fatal at instruction granularity: the loop surfaces the last
//! program counter and the offending word/address, and no partial instruction
//! effects are ever visible.
//!
//! Register-index violations are deliberately absent: decoded register fields
//! are 5-bit by construction, so an out-of-range index is a programming
//! invariant violation and panics instead of being reported as a fault.

use thiserror::Error;

/// A fatal condition raised during one execution step.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The opcode or function-selector combination is not in the RV32I table.
    ///
    /// Never guessed into a "closest" instruction; carries the raw word and
    /// the program counter it was fetched from.
    #[error("illegal instruction {word:#010x} at pc {pc:#010x}")]
    IllegalInstruction {
        /// The raw instruction word that failed to decode.
        word: u32,
        /// Program counter the word was fetched from.
        pc: u32,
    },

    /// An access past the bound of a bounded memory.
    ///
    /// The default memory is unbounded and never raises this; it only occurs
    /// when the memory was constructed with an explicit limit.
    #[error("memory access fault at {addr:#010x}")]
    MemoryFault {
        /// The faulting byte address.
        addr: u32,
    },
}
