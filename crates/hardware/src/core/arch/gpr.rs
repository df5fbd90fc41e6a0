//! DLW-1 General-Purpose Register File.
//!
//! This module implements the four 8-bit general-purpose registers A-D.
//! Registers are addressed by [`RegisterId`]; an absent register slot reads
//! as zero and swallows writes, which keeps hand-built instructions with
//! unused slots harmless.

use crate::common::constants::NUM_REGISTERS;
use crate::common::reg::RegisterId;

/// General-Purpose Register file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Creates a register file with the given contents, in `A, B, C, D` order.
    pub const fn from_array(regs: [u8; NUM_REGISTERS]) -> Self {
        Self { regs }
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, id: RegisterId) -> u8 {
        self.regs[id.index()]
    }

    /// Writes a register.
    #[inline]
    pub fn write(&mut self, id: RegisterId, val: u8) {
        self.regs[id.index()] = val;
    }

    /// Reads an optional register slot; `None` reads as zero.
    #[inline]
    pub fn read_slot(&self, slot: Option<RegisterId>) -> u8 {
        slot.map_or(0, |id| self.read(id))
    }

    /// Writes an optional register slot; writes to `None` are ignored.
    #[inline]
    pub fn write_slot(&mut self, slot: Option<RegisterId>, val: u8) {
        if let Some(id) = slot {
            self.write(id, val);
        }
    }

    /// Returns all four registers in `A, B, C, D` order.
    pub const fn as_array(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }
}
