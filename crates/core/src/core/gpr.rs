//! General-purpose register file for the RV32I core.
//!
//! Thirty-two 32-bit registers. Register `x0` is hardwired to zero: reads
//! always return zero and writes to it are silently discarded.

/// Number of general-purpose registers in the file.
pub const NUM_REGS: usize = 32;

/// The 32-entry integer register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with every register cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads register `index`.
    ///
    /// Reads of `x0` always return zero.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`NUM_REGS`].
    #[inline]
    #[must_use]
    pub fn read(&self, index: usize) -> u32 {
        assert!(index < NUM_REGS, "register index {index} out of range");
        self.regs[index]
    }

    /// Writes `value` to register `index`.
    ///
    /// Writes to `x0` are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`NUM_REGS`].
    #[inline]
    pub fn write(&mut self, index: usize, value: u32) {
        assert!(index < NUM_REGS, "register index {index} out of range");
        if index != 0 {
            self.regs[index] = value;
        }
    }

    /// Prints every register in hexadecimal and binary.
    pub fn dump(&self) {
        for (index, value) in self.regs.iter().enumerate() {
            println!("x{index:<2} = {value:#010x}  {value:#034b}");
        }
    }
}
