//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the DLW-1 instruction model, the decoder, and the disassembler.
//!
//! # Encoding
//!
//! Every instruction is one 16-bit word: a mode flag in bit 0, a 3-bit
//! opcode in bits 1-3, and opcode-specific register and immediate fields in
//! bits 4-15. Words are stored big-endian in memory.

/// Instruction decoding logic and relative-offset sign extension.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

pub use decode::{calculate_offset, decode};
pub use instruction::{AddressingMode, Instruction, Opcode};
