//! DLW-1 Instruction Decoder.
//!
//! This module handles the decoding of 16-bit DLW-1 instruction words into
//! the structured [`Instruction`] format. It extracts the opcode, addressing
//! mode, and register fields for every opcode/mode combination, and provides
//! the sign extension of the two displacement widths used by relative
//! addressing (8 bits for LOAD/STORE, 9 bits for the JUMP family).
//!
//! Decoding is total: every one of the 65536 possible words maps to exactly
//! one instruction. Unrecognised JUMP-family patterns decode to the halt
//! sentinel (`AddressingMode::None`).

use crate::common::reg::RegisterId;
use crate::isa::instruction::{AddressingMode, Instruction, InstructionBits, Opcode};

/// Total width of the signed offset produced by [`calculate_offset`].
const OFFSET_WIDTH: u32 = 16;

/// Width of the LOAD/STORE relative displacement.
///
/// The displacement occupies bits 8-15 of the word; its sign bit is bit 7
/// of the extracted field.
const LOAD_STORE_OFFSET_BITS: u32 = 8;

/// Width of the JUMP-family relative displacement.
///
/// The displacement occupies bits 7-15 of the word; its sign bit is bit 8
/// of the extracted field.
const JUMP_OFFSET_BITS: u32 = 9;

/// Decodes a DLW-1 instruction word into its component fields.
///
/// # Arguments
///
/// * `raw` - The 16-bit instruction word, as assembled by fetch.
///
/// # Returns
///
/// The decoded [`Instruction`]. Register slots the encoding does not use
/// are `None`, and an unused immediate is zero.
pub fn decode(raw: u16) -> Instruction {
    let opcode = Opcode::from_bits(raw.opcode_bits());

    let mut ins = match opcode {
        Opcode::Add | Opcode::Sub => decode_arithmetic(raw, opcode),
        Opcode::Load => decode_load(raw),
        Opcode::Store => decode_store(raw),
        Opcode::Jump | Opcode::JumpZ | Opcode::JumpNz | Opcode::JumpN => decode_jump(raw, opcode),
    };
    ins.raw = raw;
    ins
}

/// Decodes ADD and SUB.
///
/// Register form: `src=4-5, src2=6-7, dest=8-9`.
/// Immediate form: `src=4-5, dest=6-7, imm=8-15`.
fn decode_arithmetic(raw: u16, opcode: Opcode) -> Instruction {
    let src = RegisterId::from_bits(raw.field_4_5());

    if raw.mode_flag() {
        Instruction::new(AddressingMode::Immediate, opcode)
            .with_src(src)
            .with_dest(RegisterId::from_bits(raw.field_6_7()))
            .with_imm(raw.imm8())
    } else {
        Instruction::new(AddressingMode::Register, opcode)
            .with_src(src)
            .with_src2(RegisterId::from_bits(raw.field_6_7()))
            .with_dest(RegisterId::from_bits(raw.field_8_9()))
    }
}

/// Decodes LOAD.
///
/// With the mode flag clear, a non-zero field at bits 6-7 turns the
/// register load into a bank switch to the bank named by bits 8-15.
fn decode_load(raw: u16) -> Instruction {
    if raw.mode_flag() {
        let base = raw.field_4_5();
        let dest = RegisterId::from_bits(raw.field_6_7());

        if base == 0 {
            Instruction::new(AddressingMode::Immediate, Opcode::Load)
                .with_dest(dest)
                .with_imm(raw.imm8())
        } else {
            Instruction::new(AddressingMode::Relative, Opcode::Load)
                .with_src(RegisterId::from_bits(base))
                .with_dest(dest)
                .with_imm(raw.imm8())
        }
    } else if raw.field_6_7() == 0 {
        Instruction::new(AddressingMode::Register, Opcode::Load)
            .with_src(RegisterId::from_bits(raw.field_4_5()))
            .with_dest(RegisterId::from_bits(raw.field_8_9()))
    } else {
        Instruction::new(AddressingMode::None, Opcode::Load).with_imm(raw.imm8())
    }
}

/// Decodes STORE.
///
/// With the mode flag clear, a non-zero field at bits 6-7 turns the
/// register store into a register-to-register move.
fn decode_store(raw: u16) -> Instruction {
    if raw.mode_flag() {
        let base = raw.field_4_5();
        let value = RegisterId::from_bits(raw.field_6_7());

        if base == 0 {
            Instruction::new(AddressingMode::Immediate, Opcode::Store)
                .with_src(value)
                .with_imm(raw.imm8())
        } else {
            Instruction::new(AddressingMode::Relative, Opcode::Store)
                .with_src(RegisterId::from_bits(base))
                .with_src2(value)
                .with_imm(raw.imm8())
        }
    } else {
        let mode = if raw.field_6_7() == 0 {
            AddressingMode::Register
        } else {
            AddressingMode::None
        };
        Instruction::new(mode, Opcode::Store)
            .with_src(RegisterId::from_bits(raw.field_4_5()))
            .with_dest(RegisterId::from_bits(raw.field_8_9()))
    }
}

/// Decodes JUMP, JUMPZ, JUMPNZ and JUMPN.
///
/// A register-form word with any bit set in 6-15 is the halt sentinel.
fn decode_jump(raw: u16, opcode: Opcode) -> Instruction {
    if raw.mode_flag() {
        if raw.field_4_5() == 0 {
            Instruction::new(AddressingMode::Immediate, opcode).with_imm(raw.imm8())
        } else {
            Instruction::new(AddressingMode::Relative, opcode).with_imm(raw.imm9())
        }
    } else if raw.field_6_15() == 0 {
        Instruction::new(AddressingMode::Register, opcode)
            .with_src(RegisterId::from_bits(raw.field_4_5()))
    } else {
        Instruction::new(AddressingMode::None, opcode)
    }
}

/// Interprets a relative-addressing immediate as a signed displacement.
///
/// LOAD and STORE carry an 8-bit two's-complement displacement; the JUMP
/// family (and any other opcode) carries a 9-bit one. Bits above the
/// field width are ignored.
///
/// # Examples
///
/// ```
/// use dlw1_core::isa::decode::calculate_offset;
/// use dlw1_core::isa::instruction::Opcode;
///
/// assert_eq!(calculate_offset(0b1101_0101, Opcode::Load), -43);
/// assert_eq!(calculate_offset(0b1_0000_0110, Opcode::Jump), -250);
/// ```
pub fn calculate_offset(imm: u16, opcode: Opcode) -> i16 {
    match opcode {
        Opcode::Load | Opcode::Store => sign_extend(imm, LOAD_STORE_OFFSET_BITS),
        _ => sign_extend(imm, JUMP_OFFSET_BITS),
    }
}

/// Sign extends the low `bits` of `val` to a 16-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u16, bits: u32) -> i16 {
    let shift = OFFSET_WIDTH - bits;
    ((val << shift) as i16) >> shift
}
