//! Byte-addressable little-endian memory.
//!
//! Memory is sparse: only addresses that have been written are stored, and
//! reads of unwritten addresses return zero. An optional bound turns accesses
//! at or beyond a limit address into [`Fault::MemoryFault`] instead.

use std::collections::BTreeMap;

use crate::common::bits::{set_slice, slice};
use crate::common::Fault;

/// Sparse byte-addressable memory with little-endian multi-byte access.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    cells: BTreeMap<u32, u8>,
    bound: Option<u32>,
}

impl Memory {
    /// Creates an empty memory covering the full 32-bit address space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty memory that faults on any access at or beyond `limit`.
    #[must_use]
    pub fn bounded(limit: u32) -> Self {
        Self {
            cells: BTreeMap::new(),
            bound: Some(limit),
        }
    }

    #[inline]
    fn check(&self, addr: u32) -> Result<(), Fault> {
        match self.bound {
            Some(limit) if addr >= limit => Err(Fault::MemoryFault { addr }),
            _ => Ok(()),
        }
    }

    /// Reads a single byte. Unwritten addresses read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if `addr` lies outside the bound.
    pub fn read_byte(&self, addr: u32) -> Result<u8, Fault> {
        self.check(addr)?;
        Ok(self.cells.get(&addr).copied().unwrap_or(0))
    }

    /// Reads a little-endian halfword starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any touched address lies outside the
    /// bound.
    pub fn read_half(&self, addr: u32) -> Result<u16, Fault> {
        let mut half = 0;
        for i in 0..2 {
            let byte = self.read_byte(addr.wrapping_add(i))?;
            half = set_slice(half, u32::from(byte), i * 8, i * 8 + 7);
        }
        Ok(half as u16)
    }

    /// Reads a little-endian word starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any touched address lies outside the
    /// bound.
    pub fn read_word(&self, addr: u32) -> Result<u32, Fault> {
        let mut word = 0;
        for i in 0..4 {
            let byte = self.read_byte(addr.wrapping_add(i))?;
            word = set_slice(word, u32::from(byte), i * 8, i * 8 + 7);
        }
        Ok(word)
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if `addr` lies outside the bound.
    pub fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), Fault> {
        self.check(addr)?;
        self.cells.insert(addr, value);
        Ok(())
    }

    /// Writes a halfword little-endian starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any touched address lies outside the
    /// bound. The write is checked up front so a fault leaves memory intact.
    pub fn write_half(&mut self, addr: u32, value: u16) -> Result<(), Fault> {
        for i in 0..2 {
            self.check(addr.wrapping_add(i))?;
        }
        for i in 0..2 {
            let byte = slice(u32::from(value), i * 8, i * 8 + 7) as u8;
            self.write_byte(addr.wrapping_add(i), byte)?;
        }
        Ok(())
    }

    /// Writes a word little-endian starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if any touched address lies outside the
    /// bound. The write is checked up front so a fault leaves memory intact.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), Fault> {
        for i in 0..4 {
            self.check(addr.wrapping_add(i))?;
        }
        for i in 0..4 {
            let byte = slice(value, i * 8, i * 8 + 7) as u8;
            self.write_byte(addr.wrapping_add(i), byte)?;
        }
        Ok(())
    }

    /// Copies `image` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryFault`] if the image would extend outside the
    /// bound.
    pub fn load_image(&mut self, base: u32, image: &[u8]) -> Result<(), Fault> {
        for (offset, byte) in image.iter().enumerate() {
            self.write_byte(base.wrapping_add(offset as u32), *byte)?;
        }
        Ok(())
    }

    /// Iterates over every written cell in ascending address order.
    pub fn populated(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.cells.iter().map(|(addr, byte)| (*addr, *byte))
    }
}
