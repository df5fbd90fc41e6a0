//! # Rendering Tests
//!
//! Boxed instruction and CPU views and the memory dump layout.

use pretty_assertions::assert_eq;

use dlw1_core::common::RegisterId::{A, B, C, D};
use dlw1_core::core::Cpu;
use dlw1_core::core::arch::Psw;
use dlw1_core::isa::decode::decode;
use dlw1_core::isa::instruction::{AddressingMode, Instruction, Opcode};
use dlw1_core::sim::render::{boxed, render_bank, render_cpu, render_instruction, render_memory};
use dlw1_core::soc::Memory;

use crate::common::encode::*;

#[test]
fn test_boxed_pads_to_widest_line() {
    let text = boxed(&["ab".to_string(), "abcd".to_string()]);
    assert_eq!(text, "+------+\n| ab   |\n| abcd |\n+------+");
}

#[test]
fn test_render_register_instruction() {
    let text = render_instruction(&decode(add_reg(A, B, C)));
    assert!(text.contains("| Addressing Mode: REGISTER"), "{text}");
    assert!(text.contains("| Opcode: ADD"), "{text}");
    assert!(text.contains("| Src1: A"), "{text}");
    assert!(text.contains("| Src2: B"), "{text}");
    assert!(text.contains("| Dest: C"), "{text}");
}

#[test]
fn test_render_relative_store() {
    let text = render_instruction(&decode(store_rel(A, D, -2)));
    assert!(text.contains("| Src: A"), "{text}");
    assert!(text.contains("| Base: D"), "{text}");
    assert!(text.contains("| Offset: -2"), "{text}");
    assert!(!text.contains("Dest"), "{text}");
}

#[test]
fn test_render_none_forms() {
    assert!(render_instruction(&decode(bank(3))).contains("| Bank: 3"));
    assert!(render_instruction(&decode(mov(B, C))).contains("| Move Src: B"));
    assert!(render_instruction(&decode(halt())).contains("| Halt"));
}

#[test]
fn test_render_missing_register_slots() {
    let ins = Instruction::new(AddressingMode::Register, Opcode::Add).with_src(A);
    let text = render_instruction(&ins);
    assert!(text.contains("Src1: A"), "{text}");
    assert!(text.contains("Src2: NONE"), "{text}");
    assert!(text.contains("Dest: NONE"), "{text}");
}

#[test]
fn test_render_cpu() {
    let cpu = Cpu::from_parts([5, 20, 241, 0], 2, Psw::Negative);
    let text = render_cpu(&cpu);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("+-") && lines[4].starts_with("+-"));
    assert!(lines[1].contains("A: 00000101 B: 00010100 C: 11110001 D: 00000000"));
    assert!(lines[2].contains("PC: 2   PSW: NEGATIVE"));
    assert!(lines[3].contains("IR: 0b0000000000000000"));
}

#[test]
fn test_render_cpu_empty_psw() {
    assert!(render_cpu(&Cpu::new()).contains("PSW: EMPTY"));
}

#[test]
fn test_render_bank_layout() {
    let mut mem = Memory::new(1);
    mem.write_byte(0, 0b1010_1010);
    mem.write_byte(9, 1);

    let text = render_bank(&mem, 0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 33);
    assert_eq!(lines[0], "Bank 0:");
    assert!(lines[1].starts_with("10101010 00000000"));
    assert_eq!(lines[2].split(' ').nth(1), Some("00000001"));
    assert_eq!(lines[1].split(' ').count(), 8);
}

#[test]
fn test_render_missing_bank_is_empty() {
    assert_eq!(render_bank(&Memory::new(1), 1), "");
}

#[test]
fn test_render_memory_lists_every_bank() {
    let text = render_memory(&Memory::new(3));
    assert!(text.contains("Bank 0:"));
    assert!(text.contains("Bank 2:"));
    assert!(!text.contains("Bank 3:"));
}
