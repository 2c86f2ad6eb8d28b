//! Instruction semantics.
//!
//! One arm per operation. Arithmetic wraps modulo 2^32, shift amounts use
//! only the low five bits of their source, and any arm that does not
//! redirect control falls through to the sequential `pc + 4`.

use tracing::debug;

use crate::common::bits::{sign_extend, slice};
use crate::common::Fault;
use crate::core::cpu::Cpu;
use crate::isa::{Instruction, Op};

/// Sign bit of a byte widened to 32 bits.
const BYTE_SIGN: u32 = 7;
/// Sign bit of a halfword widened to 32 bits.
const HALF_SIGN: u32 = 15;

impl Cpu {
    /// Applies one decoded instruction to the architectural state.
    ///
    /// A fault leaves the program counter and registers untouched; memory
    /// writes are bound-checked before any byte lands.
    pub(crate) fn execute(&mut self, inst: &Instruction) -> Result<(), Fault> {
        let rs1 = self.regs.read(inst.rs1);
        let rs2 = self.regs.read(inst.rs2);
        let imm = inst.imm as u32;
        let link = self.pc.wrapping_add(4);
        let mut next_pc = link;

        match inst.op {
            Op::Lui => self.regs.write(inst.rd, imm),
            Op::Auipc => self.regs.write(inst.rd, self.pc.wrapping_add(imm)),

            Op::Jal => {
                self.regs.write(inst.rd, link);
                next_pc = self.pc.wrapping_add(imm);
            }
            Op::Jalr => {
                self.regs.write(inst.rd, link);
                next_pc = rs1.wrapping_add(imm) & !1;
            }

            Op::Beq => {
                if rs1 == rs2 {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }
            Op::Bne => {
                if rs1 != rs2 {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }
            Op::Blt => {
                if (rs1 as i32) < (rs2 as i32) {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }
            Op::Bge => {
                if (rs1 as i32) >= (rs2 as i32) {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }
            Op::Bltu => {
                if rs1 < rs2 {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }
            Op::Bgeu => {
                if rs1 >= rs2 {
                    next_pc = self.pc.wrapping_add(imm);
                }
            }

            Op::Lb => {
                let byte = self.mem.read_byte(rs1.wrapping_add(imm))?;
                self.regs
                    .write(inst.rd, sign_extend(u32::from(byte), BYTE_SIGN));
            }
            Op::Lh => {
                let half = self.mem.read_half(rs1.wrapping_add(imm))?;
                self.regs
                    .write(inst.rd, sign_extend(u32::from(half), HALF_SIGN));
            }
            Op::Lw => {
                let word = self.mem.read_word(rs1.wrapping_add(imm))?;
                self.regs.write(inst.rd, word);
            }
            Op::Lbu => {
                let byte = self.mem.read_byte(rs1.wrapping_add(imm))?;
                self.regs.write(inst.rd, u32::from(byte));
            }
            Op::Lhu => {
                let half = self.mem.read_half(rs1.wrapping_add(imm))?;
                self.regs.write(inst.rd, u32::from(half));
            }

            Op::Sb => {
                let byte = slice(rs2, 0, 7) as u8;
                self.mem.write_byte(rs1.wrapping_add(imm), byte)?;
            }
            Op::Sh => {
                let half = slice(rs2, 0, 15) as u16;
                self.mem.write_half(rs1.wrapping_add(imm), half)?;
            }
            Op::Sw => {
                self.mem.write_word(rs1.wrapping_add(imm), rs2)?;
            }

            Op::Addi => self.regs.write(inst.rd, rs1.wrapping_add(imm)),
            Op::Slti => self
                .regs
                .write(inst.rd, u32::from((rs1 as i32) < (imm as i32))),
            Op::Sltiu => self.regs.write(inst.rd, u32::from(rs1 < imm)),
            Op::Xori => self.regs.write(inst.rd, rs1 ^ imm),
            Op::Ori => self.regs.write(inst.rd, rs1 | imm),
            Op::Andi => self.regs.write(inst.rd, rs1 & imm),
            Op::Slli => self.regs.write(inst.rd, rs1 << slice(imm, 0, 4)),
            Op::Srli => self.regs.write(inst.rd, rs1 >> slice(imm, 0, 4)),
            Op::Srai => self
                .regs
                .write(inst.rd, ((rs1 as i32) >> slice(imm, 0, 4)) as u32),

            Op::Add => self.regs.write(inst.rd, rs1.wrapping_add(rs2)),
            Op::Sub => self.regs.write(inst.rd, rs1.wrapping_sub(rs2)),
            Op::Sll => self.regs.write(inst.rd, rs1 << slice(rs2, 0, 4)),
            Op::Slt => self
                .regs
                .write(inst.rd, u32::from((rs1 as i32) < (rs2 as i32))),
            Op::Sltu => self.regs.write(inst.rd, u32::from(rs1 < rs2)),
            Op::Xor => self.regs.write(inst.rd, rs1 ^ rs2),
            Op::Srl => self.regs.write(inst.rd, rs1 >> slice(rs2, 0, 4)),
            Op::Sra => self
                .regs
                .write(inst.rd, ((rs1 as i32) >> slice(rs2, 0, 4)) as u32),
            Op::Or => self.regs.write(inst.rd, rs1 | rs2),
            Op::And => self.regs.write(inst.rd, rs1 & rs2),

            // Memory ordering is trivially satisfied on a single in-order hart.
            Op::Fence | Op::FenceTso | Op::Pause => {}

            Op::Ecall => debug!(pc = self.pc, "environment call"),
            Op::Ebreak => {
                debug!(pc = self.pc, "breakpoint, halting");
                self.halted = true;
            }

            Op::Illegal => {
                return Err(Fault::IllegalInstruction {
                    word: inst.raw,
                    pc: self.pc,
                });
            }
        }

        self.pc = next_pc;
        Ok(())
    }
}
