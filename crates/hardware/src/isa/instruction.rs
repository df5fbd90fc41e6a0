//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the decoded instruction model for
//! the 16-bit DLW-1 encoding. Bit 0 is the least significant bit:
//!
//! ```text
//!  15          8 7   6 5   4 3     1   0
//! +-------------+-----+-----+-------+----+
//! |   bits 8-15 | 6-7 | 4-5 | opcode|mode|
//! +-------------+-----+-----+-------+----+
//! ```
//!
//! The meaning of bits 4-15 depends on the opcode and mode flag; see
//! [`decode`](crate::isa::decode::decode).

use std::fmt;

use crate::common::constants::{IMM8_MASK, IMM9_MASK, OPCODE_FIELD_MASK, REG_FIELD_MASK};
use crate::common::reg::RegisterId;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u16 = 1;
/// Bit position of the first register field (bits 4-5).
pub const FIELD_4_5_SHIFT: u16 = 4;
/// Bit position of the second register field (bits 6-7).
pub const FIELD_6_7_SHIFT: u16 = 6;
/// Bit position of the third register field and of the 8-bit immediate (bits 8-15).
pub const FIELD_8_15_SHIFT: u16 = 8;
/// Bit position of the 9-bit relative jump immediate (bits 7-15).
pub const IMM9_SHIFT: u16 = 7;

/// Trait for extracting instruction fields from a raw 16-bit word.
pub trait InstructionBits {
    /// Mode flag (bit 0). `true` selects the immediate-style encodings.
    fn mode_flag(&self) -> bool;

    /// Opcode field (bits 1-3).
    fn opcode_bits(&self) -> u16;

    /// Two-bit field at bits 4-5.
    fn field_4_5(&self) -> u16;

    /// Two-bit field at bits 6-7.
    fn field_6_7(&self) -> u16;

    /// Two-bit field at bits 8-9.
    fn field_8_9(&self) -> u16;

    /// Ten-bit field at bits 6-15, used to recognise register-mode jumps.
    fn field_6_15(&self) -> u16;

    /// Eight-bit immediate at bits 8-15.
    fn imm8(&self) -> u16;

    /// Nine-bit immediate at bits 7-15 (relative jumps).
    fn imm9(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn mode_flag(&self) -> bool {
        self & 1 != 0
    }

    #[inline(always)]
    fn opcode_bits(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_FIELD_MASK
    }

    #[inline(always)]
    fn field_4_5(&self) -> u16 {
        (self >> FIELD_4_5_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn field_6_7(&self) -> u16 {
        (self >> FIELD_6_7_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn field_8_9(&self) -> u16 {
        (self >> FIELD_8_15_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn field_6_15(&self) -> u16 {
        self >> FIELD_6_7_SHIFT
    }

    #[inline(always)]
    fn imm8(&self) -> u16 {
        (self >> FIELD_8_15_SHIFT) & IMM8_MASK
    }

    #[inline(always)]
    fn imm9(&self) -> u16 {
        (self >> IMM9_SHIFT) & IMM9_MASK
    }
}

/// How an instruction's operand is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressingMode {
    /// Operands come from registers.
    Register,
    /// Operand is the immediate field (a value or an absolute address).
    Immediate,
    /// Address is a base (register or PC) plus a signed displacement.
    Relative,
    /// Opcode-specific reserved meaning: LOAD bank switch, STORE register
    /// move, or the JUMP-family halt sentinel.
    #[default]
    None,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Register => "REGISTER",
            Self::Immediate => "IMMEDIATE",
            Self::Relative => "RELATIVE",
            Self::None => "NONE",
        })
    }
}

/// The eight DLW-1 operations, encoded in bits 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Opcode {
    /// Addition.
    #[default]
    Add = 0b000,
    /// Subtraction.
    Sub = 0b001,
    /// Memory load (and bank switch).
    Load = 0b010,
    /// Memory store (and register move).
    Store = 0b011,
    /// Unconditional jump.
    Jump = 0b100,
    /// Jump if the last result was zero.
    JumpZ = 0b101,
    /// Jump if the last result was neither zero nor negative.
    JumpNz = 0b110,
    /// Jump if the last result was negative.
    JumpN = 0b111,
}

impl Opcode {
    /// Builds an opcode from the low three bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        match bits & OPCODE_FIELD_MASK {
            0b000 => Self::Add,
            0b001 => Self::Sub,
            0b010 => Self::Load,
            0b011 => Self::Store,
            0b100 => Self::Jump,
            0b101 => Self::JumpZ,
            0b110 => Self::JumpNz,
            _ => Self::JumpN,
        }
    }

    /// Returns `true` for JUMP, JUMPZ, JUMPNZ and JUMPN.
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jump | Self::JumpZ | Self::JumpNz | Self::JumpN)
    }

    /// Lower-case assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Load => "load",
            Self::Store => "store",
            Self::Jump => "jump",
            Self::JumpZ => "jumpz",
            Self::JumpNz => "jumpnz",
            Self::JumpN => "jumpn",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Jump => "JUMP",
            Self::JumpZ => "JUMPZ",
            Self::JumpNz => "JUMPNZ",
            Self::JumpN => "JUMPN",
        })
    }
}

/// Decoded instruction.
///
/// Created fresh by each decode and consumed by execute. Register slots the
/// encoding does not use are `None`; an unused immediate is zero. For
/// relative LOAD/STORE the base register is carried in `src`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Addressing mode.
    pub mode: AddressingMode,
    /// Operation.
    pub opcode: Opcode,
    /// First source register (or base register for relative LOAD/STORE).
    pub src: Option<RegisterId>,
    /// Second source register (ADD/SUB register form, value for relative STORE).
    pub src2: Option<RegisterId>,
    /// Destination register.
    pub dest: Option<RegisterId>,
    /// Immediate field: 8 bits, or 9 bits for relative jumps.
    pub imm: u16,
    /// Raw 16-bit encoding.
    pub raw: u16,
}

impl Instruction {
    /// Builds an instruction with no register operands and a zero immediate.
    pub const fn new(mode: AddressingMode, opcode: Opcode) -> Self {
        Self {
            mode,
            opcode,
            src: None,
            src2: None,
            dest: None,
            imm: 0,
            raw: 0,
        }
    }

    /// Sets the first source register.
    pub const fn with_src(mut self, reg: RegisterId) -> Self {
        self.src = Some(reg);
        self
    }

    /// Sets the second source register.
    pub const fn with_src2(mut self, reg: RegisterId) -> Self {
        self.src2 = Some(reg);
        self
    }

    /// Sets the destination register.
    pub const fn with_dest(mut self, reg: RegisterId) -> Self {
        self.dest = Some(reg);
        self
    }

    /// Sets the immediate field.
    pub const fn with_imm(mut self, imm: u16) -> Self {
        self.imm = imm;
        self
    }

    /// Returns `true` if this is the JUMP-family halt sentinel.
    #[inline]
    pub const fn is_halt(&self) -> bool {
        self.opcode.is_jump() && matches!(self.mode, AddressingMode::None)
    }

    /// Returns `true` if this is a LOAD-encoded bank switch.
    #[inline]
    pub const fn is_bank_switch(&self) -> bool {
        matches!(self.opcode, Opcode::Load) && matches!(self.mode, AddressingMode::None)
    }

    /// Returns `true` if this is a STORE-encoded register move.
    #[inline]
    pub const fn is_move(&self) -> bool {
        matches!(self.opcode, Opcode::Store) && matches!(self.mode, AddressingMode::None)
    }
}
