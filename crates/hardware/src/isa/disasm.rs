//! Instruction Disassembler for the DLW-1.
//!
//! Converts a 16-bit instruction word (or an already decoded
//! [`Instruction`]) into a one-line assembly string for debug tracing,
//! logging, and test diagnostics.
//!
//! # Syntax
//!
//! | Form                  | Example            |
//! |-----------------------|--------------------|
//! | ADD/SUB register      | `add a, b, c`      |
//! | ADD/SUB immediate     | `sub a, #10, d`    |
//! | LOAD immediate        | `load #66, a`      |
//! | LOAD register         | `load [a], b`      |
//! | LOAD relative         | `load [d-3], c`    |
//! | LOAD bank switch      | `bank #8`          |
//! | STORE immediate       | `store a, #194`    |
//! | STORE register        | `store b, [c]`     |
//! | STORE relative        | `store a, [d+10]`  |
//! | STORE register move   | `move b, c`        |
//! | JUMP immediate        | `jumpz #42`        |
//! | JUMP register         | `jump b`           |
//! | JUMP relative         | `jumpn pc-3`       |
//! | Halt sentinel         | `halt`             |
//!
//! # Usage
//!
//! ```
//! use dlw1_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b0000_0100_1100_0001), "add a, #4, d");
//! ```

use crate::common::reg::RegisterId;
use crate::isa::decode::{calculate_offset, decode};
use crate::isa::instruction::{AddressingMode, Instruction, Opcode};

/// Returns the assembly name of an optional register slot.
#[inline]
fn reg(slot: Option<RegisterId>) -> &'static str {
    slot.map_or("?", RegisterId::name)
}

/// Formats a signed displacement with an explicit sign (`+3`, `-43`).
fn displacement(ins: &Instruction) -> String {
    format!("{:+}", calculate_offset(ins.imm, ins.opcode))
}

/// Disassembles a raw 16-bit DLW-1 word into a human-readable string.
///
/// # Arguments
///
/// * `raw` - The instruction word.
pub fn disassemble(raw: u16) -> String {
    format_instruction(&decode(raw))
}

/// Formats a decoded instruction as a one-line assembly string.
pub fn format_instruction(ins: &Instruction) -> String {
    let mn = ins.opcode.mnemonic();

    match (ins.opcode, ins.mode) {
        (Opcode::Add | Opcode::Sub, AddressingMode::Immediate) => {
            format!("{mn} {}, #{}, {}", reg(ins.src), ins.imm, reg(ins.dest))
        }
        (Opcode::Add | Opcode::Sub, _) => {
            format!("{mn} {}, {}, {}", reg(ins.src), reg(ins.src2), reg(ins.dest))
        }

        (Opcode::Load, AddressingMode::Immediate) => format!("load #{}, {}", ins.imm, reg(ins.dest)),
        (Opcode::Load, AddressingMode::Register) => {
            format!("load [{}], {}", reg(ins.src), reg(ins.dest))
        }
        (Opcode::Load, AddressingMode::Relative) => format!(
            "load [{}{}], {}",
            reg(ins.src),
            displacement(ins),
            reg(ins.dest)
        ),
        (Opcode::Load, AddressingMode::None) => format!("bank #{}", ins.imm),

        (Opcode::Store, AddressingMode::Immediate) => format!("store {}, #{}", reg(ins.src), ins.imm),
        (Opcode::Store, AddressingMode::Register) => {
            format!("store {}, [{}]", reg(ins.src), reg(ins.dest))
        }
        (Opcode::Store, AddressingMode::Relative) => format!(
            "store {}, [{}{}]",
            reg(ins.src2),
            reg(ins.src),
            displacement(ins)
        ),
        (Opcode::Store, AddressingMode::None) => {
            format!("move {}, {}", reg(ins.src), reg(ins.dest))
        }

        (_, AddressingMode::Immediate) => format!("{mn} #{}", ins.imm),
        (_, AddressingMode::Register) => format!("{mn} {}", reg(ins.src)),
        (_, AddressingMode::Relative) => format!("{mn} pc{}", displacement(ins)),
        (_, AddressingMode::None) => "halt".to_string(),
    }
}
