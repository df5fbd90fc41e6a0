//! Text rendering of machine state.
//!
//! Pure functions that turn an instruction, the CPU, or memory into text for
//! console and log output. Nothing here performs I/O.
//!
//! Instructions and CPU state are drawn as bordered boxes:
//!
//! ```text
//! +------------------------------------+
//! | A: 00000101 B: 00010100 ...        |
//! | PC: 2   PSW: NEGATIVE              |
//! | IR: 0b0000001001000010             |
//! +------------------------------------+
//! ```
//!
//! Memory is drawn as 32 rows of 8 binary bytes per bank.

use crate::common::constants::BANK_SIZE;
use crate::common::reg::RegisterId;
use crate::core::Cpu;
use crate::core::arch::Psw;
use crate::isa::decode::calculate_offset;
use crate::isa::instruction::{AddressingMode, Instruction, Opcode};
use crate::soc::Memory;

/// Bytes shown per row of a memory dump.
const MEMORY_COLUMNS: usize = 8;

/// Name of an optional register slot, `NONE` when absent.
fn slot(reg: Option<RegisterId>) -> String {
    reg.map_or_else(|| "NONE".to_string(), |r| r.to_string())
}

/// Draws `lines` inside an ASCII border, padding every line to the widest one.
pub fn boxed(lines: &[String]) -> String {
    let width = lines.iter().map(String::len).max().unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::with_capacity((width + 5) * (lines.len() + 2));
    out.push_str(&border);
    out.push('\n');
    for line in lines {
        out.push_str(&format!("| {line:<width$} |\n"));
    }
    out.push_str(&border);
    out
}

/// Renders a decoded instruction field by field.
pub fn render_instruction(ins: &Instruction) -> String {
    let mut lines = vec![
        format!("Raw: 0x{:04X} 0b{:016b}", ins.raw, ins.raw),
        format!("Addressing Mode: {}", ins.mode),
        format!("Opcode: {}", ins.opcode),
    ];

    match ins.mode {
        AddressingMode::Register => {
            lines.push(format!("Src1: {}", slot(ins.src)));
            lines.push(format!("Src2: {}", slot(ins.src2)));
            lines.push(format!("Dest: {}", slot(ins.dest)));
        }
        AddressingMode::Immediate => {
            lines.push(format!("Src: {}", slot(ins.src)));
            lines.push(format!("Imm: {}", ins.imm));
            lines.push(format!("Dest: {}", slot(ins.dest)));
        }
        AddressingMode::Relative => {
            if ins.opcode == Opcode::Store {
                lines.push(format!("Src: {}", slot(ins.src2)));
            }
            if !ins.opcode.is_jump() {
                lines.push(format!("Base: {}", slot(ins.src)));
            }
            lines.push(format!("Offset: {}", calculate_offset(ins.imm, ins.opcode)));
            if ins.opcode == Opcode::Load {
                lines.push(format!("Dest: {}", slot(ins.dest)));
            }
        }
        AddressingMode::None => match ins.opcode {
            Opcode::Load => lines.push(format!("Bank: {}", ins.imm)),
            Opcode::Store => {
                lines.push(format!("Move Src: {}", slot(ins.src)));
                lines.push(format!("Move Dest: {}", slot(ins.dest)));
            }
            _ => lines.push("Halt".to_string()),
        },
    }

    boxed(&lines)
}

/// Renders the CPU registers, PC, PSW, and instruction register.
pub fn render_cpu(cpu: &Cpu) -> String {
    let regs = RegisterId::ALL
        .iter()
        .map(|&r| format!("{r}: {:08b}", cpu.register(r)))
        .collect::<Vec<_>>()
        .join(" ");

    let psw = match cpu.psw() {
        Psw::Zero => "ZERO",
        Psw::Negative => "NEGATIVE",
        Psw::None => "EMPTY",
    };

    let mut lines = vec![
        regs,
        format!("PC: {}   PSW: {psw}", cpu.pc()),
        format!("IR: 0b{:016b}", cpu.ir()),
    ];
    if cpu.halted() {
        lines.push("HALTED".to_string());
    }

    boxed(&lines)
}

/// Renders the contents of bank `bank` as rows of binary bytes.
///
/// Returns an empty string for a bank that does not exist.
pub fn render_bank(memory: &Memory, bank: u8) -> String {
    let Some(buffer) = memory.bank(bank) else {
        return String::new();
    };

    let rows = BANK_SIZE / MEMORY_COLUMNS;
    let mut out = String::with_capacity(rows * MEMORY_COLUMNS * 9 + 16);
    out.push_str(&format!("Bank {bank}:\n"));
    for row in buffer.as_slice().chunks(MEMORY_COLUMNS) {
        let cells = row
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&cells);
        out.push('\n');
    }
    out
}

/// Renders every bank, separated by blank lines.
pub fn render_memory(memory: &Memory) -> String {
    (0..memory.num_banks())
        .map(|bank| render_bank(memory, bank))
        .collect::<Vec<_>>()
        .join("\n")
}
