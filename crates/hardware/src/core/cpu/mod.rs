//! CPU Core Definition and Cycle Primitives.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, instruction register, PSW, and halt flag.
//! 2. **Fetch:** Reading the next big-endian instruction word from the current bank.
//! 3. **Decode:** Turning the instruction register into an [`Instruction`].
//! 4. **Execute:** Applying an instruction to registers and memory (see [`execution`]).
//!
//! Memory is never owned by the CPU; each primitive borrows it for the
//! duration of one call.

/// Instruction execution (ALU, load/store, jumps, halt).
pub mod execution;

use crate::common::constants::{INSTRUCTION_SIZE, LAST_FETCH_PC, NUM_REGISTERS};
use crate::common::reg::RegisterId;
use crate::core::arch::{Gpr, Psw};
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::soc::Memory;

/// Main CPU structure containing all processor state.
///
/// Once `halted` is set it stays set: fetch and execute become no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cpu {
    regs: Gpr,
    pc: u8,
    ir: u16,
    psw: Psw,
    halted: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed state at PC 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a running CPU with preset registers, PC, and PSW.
    ///
    /// Used by harnesses that want to execute a single instruction from a
    /// known state.
    pub const fn from_parts(regs: [u8; NUM_REGISTERS], pc: u8, psw: Psw) -> Self {
        Self {
            regs: Gpr::from_array(regs),
            pc,
            ir: 0,
            psw,
            halted: false,
        }
    }

    /// Fetches the next instruction word into the instruction register.
    ///
    /// Reads `pc` (high byte) and `pc + 1` (low byte) from the current bank
    /// and advances the PC by two. If the PC is past the last full
    /// instruction slot of the bank the CPU halts without reading.
    pub fn fetch(&mut self, memory: &Memory) {
        if self.halted {
            return;
        }
        if self.pc > LAST_FETCH_PC {
            self.halted = true;
            return;
        }

        let high = memory.read_byte(self.pc);
        let low = memory.read_byte(self.pc.wrapping_add(1));
        self.ir = u16::from_be_bytes([high, low]);
        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
    }

    /// Decodes the instruction register.
    pub fn decode(&self) -> Instruction {
        decode(self.ir)
    }

    /// Runs one full fetch, decode, execute cycle.
    ///
    /// # Returns
    ///
    /// The executed instruction, or `None` if the CPU was already halted or
    /// halted during fetch.
    pub fn step(&mut self, memory: &mut Memory) -> Option<Instruction> {
        self.fetch(memory);
        if self.halted {
            return None;
        }
        let ins = self.decode();
        self.execute(&ins, memory);
        Some(ins)
    }

    /// Returns `true` once the CPU has halted.
    pub const fn halted(&self) -> bool {
        self.halted
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u8 {
        self.pc
    }

    /// Returns the instruction register.
    pub const fn ir(&self) -> u16 {
        self.ir
    }

    /// Returns the processor status word.
    pub const fn psw(&self) -> Psw {
        self.psw
    }

    /// Reads a general-purpose register.
    pub const fn register(&self, id: RegisterId) -> u8 {
        self.regs.read(id)
    }

    /// Writes a general-purpose register.
    pub fn set_register(&mut self, id: RegisterId, val: u8) {
        self.regs.write(id, val);
    }

    /// Returns all general-purpose registers in `A, B, C, D` order.
    pub const fn registers(&self) -> [u8; NUM_REGISTERS] {
        self.regs.as_array()
    }
}
