//! Register identifiers.
//!
//! The DLW-1 has four general-purpose registers addressed by a 2-bit field in
//! every instruction encoding. This module provides:
//! 1. **Identification:** The `RegisterId` enum and its conversion from raw 2-bit fields.
//! 2. **Naming:** Assembly names used by the disassembler and the state renderer.

use std::fmt;

use crate::common::constants::REG_FIELD_MASK;

/// Identifier of one of the four general-purpose registers.
///
/// Slots of an [`Instruction`](crate::isa::instruction::Instruction) that an
/// encoding does not use are represented as `Option<RegisterId>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterId {
    /// Register A (`0b00`).
    A = 0b00,
    /// Register B (`0b01`).
    B = 0b01,
    /// Register C (`0b10`).
    C = 0b10,
    /// Register D (`0b11`).
    D = 0b11,
}

impl RegisterId {
    /// All registers in encoding order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Builds a register id from the low two bits of `bits`; higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        match bits & REG_FIELD_MASK {
            0b00 => Self::A,
            0b01 => Self::B,
            0b10 => Self::C,
            _ => Self::D,
        }
    }

    /// Index of the register in the register file.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case assembly name (`"a"`..`"d"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(name)
    }
}
