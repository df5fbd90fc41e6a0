//! Instruction Decode Properties.
//!
//! Property tests over the full 16-bit instruction space: decoding is total,
//! the opcode always comes from bits 1-3, unused register slots stay empty,
//! and relative offsets sign-extend to the width their opcode uses.

use proptest::prelude::*;

use dlw1_core::isa::decode::{calculate_offset, decode};
use dlw1_core::isa::disasm::disassemble;
use dlw1_core::isa::instruction::{AddressingMode, InstructionBits, Opcode};

fn opcode_strategy() -> impl Strategy<Value = Opcode> {
    prop_oneof![
        Just(Opcode::Add),
        Just(Opcode::Sub),
        Just(Opcode::Load),
        Just(Opcode::Store),
        Just(Opcode::Jump),
        Just(Opcode::JumpZ),
        Just(Opcode::JumpNz),
        Just(Opcode::JumpN),
    ]
}

proptest! {
    #[test]
    fn decode_is_total(raw in any::<u16>()) {
        let ins = decode(raw);
        prop_assert_eq!(ins.raw, raw);
        prop_assert_eq!(ins.opcode, Opcode::from_bits(raw.opcode_bits()));
        prop_assert!(!disassemble(raw).is_empty());
    }

    #[test]
    fn immediate_fits_its_field(raw in any::<u16>()) {
        let ins = decode(raw);
        let limit = if ins.opcode.is_jump() && ins.mode == AddressingMode::Relative {
            0x1FF
        } else {
            0xFF
        };
        prop_assert!(ins.imm <= limit);
    }

    #[test]
    fn mode_flag_selects_encoding_family(raw in any::<u16>()) {
        let ins = decode(raw);
        let immediate_family = matches!(ins.mode, AddressingMode::Immediate | AddressingMode::Relative);
        prop_assert_eq!(immediate_family, raw.mode_flag());
    }

    #[test]
    fn arithmetic_always_has_source_and_destination(raw in any::<u16>()) {
        let ins = decode(raw);
        if matches!(ins.opcode, Opcode::Add | Opcode::Sub) {
            prop_assert!(ins.src.is_some());
            prop_assert!(ins.dest.is_some());
            prop_assert_eq!(ins.src2.is_some(), ins.mode == AddressingMode::Register);
        }
    }

    #[test]
    fn jumps_never_write_registers(raw in any::<u16>()) {
        let ins = decode(raw);
        if ins.opcode.is_jump() {
            prop_assert!(ins.dest.is_none());
            prop_assert!(ins.src2.is_none());
        }
    }

    #[test]
    fn offset_round_trips_through_field(offset in -128i16..=127, opcode in opcode_strategy()) {
        let width_mask: u16 = if matches!(opcode, Opcode::Load | Opcode::Store) { 0xFF } else { 0x1FF };
        let imm = (offset as u16) & width_mask;
        prop_assert_eq!(calculate_offset(imm, opcode), offset);
    }

    #[test]
    fn jump_offsets_cover_nine_bits(offset in -256i16..=255) {
        let imm = (offset as u16) & 0x1FF;
        prop_assert_eq!(calculate_offset(imm, Opcode::JumpN), offset);
    }
}
