//! Instruction Disassembler for RV32I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, the interactive shell echo, and test
//! diagnostics. Presentation-only: it carries no behavioral contract beyond
//! reflecting the decoder's view of the word.

use crate::common::bits::slice;
use crate::isa::decode::decode;
use crate::isa::instruction::{Format, Op};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Mnemonic table indexed by the operation tag, in declaration order of
/// [`Op`]. Built once as an immutable array.
const MNEMONICS: [&str; 43] = [
    "lui", "auipc", "jal", "jalr", "beq", "bne", "blt", "bge", "bltu", "bgeu", "lb", "lh", "lw",
    "lbu", "lhu", "sb", "sh", "sw", "addi", "slti", "sltiu", "xori", "ori", "andi", "slli", "srli",
    "srai", "add", "sub", "sll", "slt", "sltu", "xor", "srl", "sra", "or", "and", "fence",
    "fence.tso", "pause", "ecall", "ebreak", "illegal",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Returns the mnemonic for an operation tag.
#[inline]
pub fn mnemonic(op: Op) -> &'static str {
    MNEMONICS[op as usize]
}

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns text like `"add a0, a1, a2"`, or `"illegal 0xffffffff"` for
/// unrecognized encodings.
pub fn disassemble(word: u32) -> String {
    let inst = decode(word);
    let mn = mnemonic(inst.op);

    match inst.op {
        Op::Illegal => format!("{mn} {word:#010x}"),
        Op::Fence | Op::FenceTso | Op::Pause | Op::Ecall | Op::Ebreak => mn.to_owned(),
        Op::Lui | Op::Auipc => {
            // Render the raw 20-bit upper immediate, as assemblers write it.
            format!("{mn} {}, {:#x}", xreg(inst.rd), (inst.imm as u32) >> 12)
        }
        Op::Jal => format!("{mn} {}, {}", xreg(inst.rd), inst.imm),
        Op::Jalr | Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu => format!(
            "{mn} {}, {}({})",
            xreg(inst.rd),
            inst.imm,
            xreg(inst.rs1)
        ),
        Op::Slli | Op::Srli | Op::Srai => format!(
            "{mn} {}, {}, {}",
            xreg(inst.rd),
            xreg(inst.rs1),
            slice(inst.imm as u32, 0, 4)
        ),
        _ => match inst.format {
            Format::R => format!(
                "{mn} {}, {}, {}",
                xreg(inst.rd),
                xreg(inst.rs1),
                xreg(inst.rs2)
            ),
            Format::B => format!(
                "{mn} {}, {}, {}",
                xreg(inst.rs1),
                xreg(inst.rs2),
                inst.imm
            ),
            Format::S => format!(
                "{mn} {}, {}({})",
                xreg(inst.rs2),
                inst.imm,
                xreg(inst.rs1)
            ),
            // Remaining I-format arithmetic (ADDI, SLTI, ...).
            _ => format!(
                "{mn} {}, {}, {}",
                xreg(inst.rd),
                xreg(inst.rs1),
                inst.imm
            ),
        },
    }
}
