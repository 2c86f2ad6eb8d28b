//! Instruction representation and field extraction.
//!
//! Provides the [`InstructionBits`] extraction trait, the six encoding
//! formats, the closed set of RV32I operations, and the immutable decoded
//! [`Instruction`] view produced by [`crate::isa::decode`].

use crate::common::bits;

/// Trait for extracting the unconditional instruction fields from a raw
/// 32-bit encoding.
///
/// Every field lives at a fixed bit position regardless of format; fields
/// that are meaningless for a given format are simply ignored downstream.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31). Register 0 (x0) is
    /// hardwired to zero and writes to it are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        bits::slice(*self, 0, 6)
    }

    #[inline]
    fn rd(&self) -> usize {
        bits::slice(*self, 7, 11) as usize
    }

    #[inline]
    fn rs1(&self) -> usize {
        bits::slice(*self, 15, 19) as usize
    }

    #[inline]
    fn rs2(&self) -> usize {
        bits::slice(*self, 20, 24) as usize
    }

    #[inline]
    fn funct3(&self) -> u32 {
        bits::slice(*self, 12, 14)
    }

    #[inline]
    fn funct7(&self) -> u32 {
        bits::slice(*self, 25, 31)
    }
}

/// The six RV32I instruction encoding formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Register-register (ADD, SUB, ...). No immediate.
    R,
    /// Short immediate (ADDI, loads, JALR, SYSTEM). 12-bit immediate.
    #[default]
    I,
    /// Store. 12-bit immediate split across two fields.
    S,
    /// Conditional branch. 13-bit even immediate.
    B,
    /// Upper immediate (LUI, AUIPC). Immediate occupies bits 31:12.
    U,
    /// Unconditional jump (JAL). 21-bit even immediate.
    J,
}

/// The closed set of RV32I operations, plus the decode-failure sentinel.
///
/// Produced exactly once per fetched word by the decoder; execution is a
/// single exhaustive match over this tag, so the decode table and the
/// execute table cannot drift apart without a compile error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)] // names are the RISC-V mnemonics
pub enum Op {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Fence,
    FenceTso,
    Pause,
    Ecall,
    Ebreak,
    /// The word does not encode any RV32I instruction. Never executed as a
    /// no-op; the execution engine reports it as a fault.
    #[default]
    Illegal,
}

/// A decoded, immutable view of exactly one instruction word.
///
/// Created fresh for every fetched word and never mutated after
/// construction; decoding is a one-shot pure function of the word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Encoding format selected by the opcode.
    pub format: Format,
    /// Resolved operation, or [`Op::Illegal`].
    pub op: Op,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate; zero for formats without one.
    pub imm: i32,
}
