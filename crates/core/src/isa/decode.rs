//! RV32I Instruction Decoder.
//!
//! Turns a raw 32-bit word into a structured [`Instruction`]: the encoding
//! format is selected by the opcode, operand fields are extracted
//! unconditionally, the format-specific immediate is assembled from its
//! non-contiguous bit groups and sign-extended, and the concrete operation
//! is resolved through the opcode/funct3/funct7 tables.
//!
//! The decoder never guesses: any selector combination outside the RV32I
//! table yields [`Op::Illegal`] rather than a plausible fallback.

use crate::common::bits::{set_slice, sign_extend, slice};
use crate::isa::instruction::{Format, Instruction, InstructionBits, Op};
use crate::isa::{funct3, funct7, opcodes};

/// Sign bit position of the I-type and S-type immediates.
const IMM_SIGN_I_S: u32 = 11;

/// Sign bit position of the B-type immediate.
const IMM_SIGN_B: u32 = 12;

/// Sign bit position of the J-type immediate.
const IMM_SIGN_J: u32 = 20;

/// Raw I-immediate encoding of EBREAK under the SYSTEM opcode.
const SYSTEM_IMM_EBREAK: i32 = 1;

/// Raw fm/pred/succ immediate of FENCE.TSO under the MISC-MEM opcode.
const FENCE_IMM_TSO: i32 = 0x833;

/// Raw fm/pred/succ immediate of PAUSE under the MISC-MEM opcode.
const FENCE_IMM_PAUSE: i32 = 0x010;

/// Decodes a raw RV32I instruction word.
///
/// This is a pure function: the same word always produces the same
/// [`Instruction`], and nothing is mutated.
pub fn decode(word: u32) -> Instruction {
    let opcode = word.opcode();
    let format = format_of(opcode);

    let imm = match format {
        Format::R => 0,
        Format::I => decode_i_imm(word),
        Format::S => decode_s_imm(word),
        Format::B => decode_b_imm(word),
        Format::U => decode_u_imm(word),
        Format::J => decode_j_imm(word),
    };

    let mut inst = Instruction {
        raw: word,
        format,
        op: Op::Illegal,
        rd: word.rd(),
        rs1: word.rs1(),
        rs2: word.rs2(),
        funct3: word.funct3(),
        funct7: word.funct7(),
        imm,
    };
    inst.op = resolve(&inst, opcode);
    inst
}

/// Selects the encoding format from the major opcode.
///
/// Unrecognized opcodes fall back to format I by convention; the word still
/// resolves to [`Op::Illegal`].
fn format_of(opcode: u32) -> Format {
    match opcode {
        opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U,
        opcodes::OP_JAL => Format::J,
        opcodes::OP_BRANCH => Format::B,
        opcodes::OP_STORE => Format::S,
        opcodes::OP_REG => Format::R,
        _ => Format::I,
    }
}

/// I-type: bits 20-31 form imm[11:0].
fn decode_i_imm(word: u32) -> i32 {
    sign_extend(slice(word, 20, 31), IMM_SIGN_I_S) as i32
}

/// S-type: bits 25-31 form imm[11:5], bits 7-11 form imm[4:0].
fn decode_s_imm(word: u32) -> i32 {
    let mut imm = set_slice(0, slice(word, 7, 11), 0, 4);
    imm = set_slice(imm, slice(word, 25, 31), 5, 11);
    sign_extend(imm, IMM_SIGN_I_S) as i32
}

/// B-type: bit 31 is imm[12], bit 7 is imm[11], bits 25-30 form imm[10:5],
/// bits 8-11 form imm[4:1]. Bit 0 is always zero (branch targets are even).
fn decode_b_imm(word: u32) -> i32 {
    let mut imm = set_slice(0, slice(word, 8, 11), 1, 4);
    imm = set_slice(imm, slice(word, 25, 30), 5, 10);
    imm = set_slice(imm, slice(word, 7, 7), 11, 11);
    imm = set_slice(imm, slice(word, 31, 31), 12, 12);
    sign_extend(imm, IMM_SIGN_B) as i32
}

/// U-type: bits 12-31 form imm[31:12]; the low 12 bits are zero and the
/// sign bit is already in its natural position.
fn decode_u_imm(word: u32) -> i32 {
    set_slice(0, slice(word, 12, 31), 12, 31) as i32
}

/// J-type: bit 31 is imm[20], bits 12-19 form imm[19:12], bit 20 is
/// imm[11], bits 21-30 form imm[10:1]. Bit 0 is always zero.
fn decode_j_imm(word: u32) -> i32 {
    let mut imm = set_slice(0, slice(word, 21, 30), 1, 10);
    imm = set_slice(imm, slice(word, 20, 20), 11, 11);
    imm = set_slice(imm, slice(word, 12, 19), 12, 19);
    imm = set_slice(imm, slice(word, 31, 31), 20, 20);
    sign_extend(imm, IMM_SIGN_J) as i32
}

/// Resolves the concrete operation: opcode first, then funct3 where an
/// opcode multiplexes several operations, then funct7 for the add/sub and
/// shift-right pairs only.
fn resolve(inst: &Instruction, opcode: u32) -> Op {
    match opcode {
        opcodes::OP_LUI => Op::Lui,
        opcodes::OP_AUIPC => Op::Auipc,
        opcodes::OP_JAL => Op::Jal,
        opcodes::OP_JALR => match inst.funct3 {
            0b000 => Op::Jalr,
            _ => Op::Illegal,
        },
        opcodes::OP_BRANCH => resolve_branch(inst.funct3),
        opcodes::OP_LOAD => resolve_load(inst.funct3),
        opcodes::OP_STORE => resolve_store(inst.funct3),
        opcodes::OP_IMM => resolve_op_imm(inst.funct3, inst.funct7),
        opcodes::OP_REG => resolve_op_reg(inst.funct3, inst.funct7),
        opcodes::OP_MISC_MEM => resolve_misc_mem(inst.funct3, inst.imm),
        opcodes::OP_SYSTEM => resolve_system(inst.imm),
        _ => Op::Illegal,
    }
}

fn resolve_branch(funct3: u32) -> Op {
    match funct3 {
        funct3::BEQ => Op::Beq,
        funct3::BNE => Op::Bne,
        funct3::BLT => Op::Blt,
        funct3::BGE => Op::Bge,
        funct3::BLTU => Op::Bltu,
        funct3::BGEU => Op::Bgeu,
        _ => Op::Illegal,
    }
}

fn resolve_load(funct3: u32) -> Op {
    match funct3 {
        funct3::LB => Op::Lb,
        funct3::LH => Op::Lh,
        funct3::LW => Op::Lw,
        funct3::LBU => Op::Lbu,
        funct3::LHU => Op::Lhu,
        _ => Op::Illegal,
    }
}

fn resolve_store(funct3: u32) -> Op {
    match funct3 {
        funct3::SB => Op::Sb,
        funct3::SH => Op::Sh,
        funct3::SW => Op::Sw,
        _ => Op::Illegal,
    }
}

fn resolve_op_imm(f3: u32, f7: u32) -> Op {
    match f3 {
        funct3::ADD_SUB => Op::Addi,
        funct3::SLT => Op::Slti,
        funct3::SLTU => Op::Sltiu,
        funct3::XOR => Op::Xori,
        funct3::OR => Op::Ori,
        funct3::AND => Op::Andi,
        funct3::SLL => Op::Slli,
        funct3::SRL_SRA => match f7 {
            funct7::DEFAULT => Op::Srli,
            funct7::SRA => Op::Srai,
            _ => Op::Illegal,
        },
        _ => Op::Illegal,
    }
}

fn resolve_op_reg(f3: u32, f7: u32) -> Op {
    match f3 {
        funct3::ADD_SUB => match f7 {
            funct7::DEFAULT => Op::Add,
            funct7::SUB => Op::Sub,
            _ => Op::Illegal,
        },
        funct3::SLL => Op::Sll,
        funct3::SLT => Op::Slt,
        funct3::SLTU => Op::Sltu,
        funct3::XOR => Op::Xor,
        funct3::SRL_SRA => match f7 {
            funct7::DEFAULT => Op::Srl,
            funct7::SRA => Op::Sra,
            _ => Op::Illegal,
        },
        funct3::OR => Op::Or,
        funct3::AND => Op::And,
        _ => Op::Illegal,
    }
}

/// The fm/pred/succ immediate distinguishes the fence flavours; the base
/// ISA treats unrecognized fm/pred/succ combinations as a plain FENCE.
fn resolve_misc_mem(f3: u32, imm: i32) -> Op {
    match f3 {
        funct3::FENCE => match imm {
            FENCE_IMM_TSO => Op::FenceTso,
            FENCE_IMM_PAUSE => Op::Pause,
            _ => Op::Fence,
        },
        _ => Op::Illegal,
    }
}

/// SYSTEM instructions are distinguished by the computed I-immediate: 1 is
/// EBREAK, every other value (only 0 in this subset) is ECALL.
fn resolve_system(imm: i32) -> Op {
    if imm == SYSTEM_IMM_EBREAK {
        Op::Ebreak
    } else {
        Op::Ecall
    }
}
