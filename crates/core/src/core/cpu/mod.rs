//! The RV32I CPU model.
//!
//! Holds the program counter, register file, and memory, and drives the
//! fetch-decode-execute loop one instruction at a time.

mod execute;

use tracing::{error, trace};

use crate::common::Fault;
use crate::core::gpr::Gpr;
use crate::isa::decode;
use crate::mem::Memory;

/// A single-hart RV32I processor.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// Program counter.
    pub pc: u32,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Attached memory.
    pub mem: Memory,
    /// Set once an `ebreak` retires; the run loop stops at the next check.
    pub halted: bool,
    /// Instructions retired since construction.
    pub retired: u64,
}

impl Cpu {
    /// Creates a CPU over `mem` with the program counter at `start_pc`.
    #[must_use]
    pub fn new(mem: Memory, start_pc: u32) -> Self {
        Self {
            pc: start_pc,
            regs: Gpr::new(),
            mem,
            halted: false,
            retired: 0,
        }
    }

    /// Fetches, decodes, and executes one instruction.
    ///
    /// On success the program counter has advanced to the next instruction
    /// (or to a branch/jump target). On failure the architectural state is
    /// untouched and the program counter still addresses the faulting
    /// instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if the fetch or a data access leaves
    /// the memory bound, and [`Fault::IllegalInstruction`] if the fetched
    /// word does not decode to a recognized instruction.
    pub fn step(&mut self) -> Result<(), Fault> {
        let word = self.mem.read_word(self.pc)?;
        self.execute_word(word)
    }

    /// Decodes and executes `word` at the current program counter.
    ///
    /// This is the entry point for interactive use, where instructions come
    /// from the user rather than from memory.
    ///
    /// # Errors
    ///
    /// Returns the same faults as [`Cpu::step`], minus the fetch.
    pub fn execute_word(&mut self, word: u32) -> Result<(), Fault> {
        let inst = decode(word);
        trace!(pc = self.pc, word, op = ?inst.op, "executing");
        self.execute(&inst)?;
        self.retired += 1;
        Ok(())
    }

    /// Runs until the CPU halts, faults, or retires `max_steps` instructions.
    ///
    /// Returns the number of instructions retired by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Fault`] raised by [`Cpu::step`].
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<u64, Fault> {
        let mut steps = 0;
        while !self.halted {
            if let Some(cap) = max_steps {
                if steps >= cap {
                    break;
                }
            }
            if let Err(fault) = self.step() {
                error!(pc = self.pc, %fault, "execution fault");
                return Err(fault);
            }
            steps += 1;
        }
        Ok(steps)
    }

    /// Prints the program counter, registers, and every written memory cell.
    pub fn dump_state(&self) {
        println!("pc  = {:#010x}  {:#034b}", self.pc, self.pc);
        self.regs.dump();
        for (addr, byte) in self.mem.populated() {
            println!("[{addr:#010x}] = {byte:#04x}  {byte:#010b}");
        }
    }
}
