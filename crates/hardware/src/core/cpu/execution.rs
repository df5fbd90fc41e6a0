//! Instruction Execution.
//!
//! This module applies a decoded [`Instruction`] to the CPU and memory. It performs:
//! 1. **Arithmetic:** ADD/SUB with 8-bit wraparound and a freshly computed PSW.
//! 2. **Loads:** Immediate, register-indirect, and base-plus-displacement loads, plus bank switching.
//! 3. **Stores:** Immediate, register-indirect, and base-plus-displacement stores, plus register moves.
//! 4. **Control Flow:** Conditional and unconditional jumps and the halt sentinel.
//!
//! Every opcode/mode combination is total. Address arithmetic wraps at the
//! 8-bit boundary and never faults.

use super::Cpu;
use crate::core::arch::Psw;
use crate::isa::decode::calculate_offset;
use crate::isa::instruction::{AddressingMode, Instruction, Opcode};
use crate::soc::Memory;

/// Adds a signed displacement to an 8-bit base, wrapping modulo 256.
#[inline]
const fn offset_address(base: u8, offset: i16) -> u8 {
    base.wrapping_add(offset as u8)
}

impl Cpu {
    /// Executes a decoded instruction.
    ///
    /// The PC has already been advanced past the instruction by fetch, so
    /// relative jumps are taken from the following instruction and a jump
    /// that is not taken simply falls through. Executing on a halted CPU
    /// has no effect.
    pub fn execute(&mut self, ins: &Instruction, memory: &mut Memory) {
        if self.halted {
            return;
        }

        match ins.opcode {
            Opcode::Add | Opcode::Sub => self.execute_arithmetic(ins),
            Opcode::Load => self.execute_load(ins, memory),
            Opcode::Store => self.execute_store(ins, memory),
            Opcode::Jump | Opcode::JumpZ | Opcode::JumpNz | Opcode::JumpN => {
                self.execute_jump(ins);
            }
        }
    }

    /// ADD and SUB.
    fn execute_arithmetic(&mut self, ins: &Instruction) {
        let a = self.regs.read_slot(ins.src);
        let b = if ins.mode == AddressingMode::Immediate {
            ins.imm as u8
        } else {
            self.regs.read_slot(ins.src2)
        };

        let result = if ins.opcode == Opcode::Add {
            a.wrapping_add(b)
        } else {
            a.wrapping_sub(b)
        };

        self.regs.write_slot(ins.dest, result);
        self.psw = Psw::from_result(result);
    }

    /// LOAD, including the bank-switch form.
    fn execute_load(&mut self, ins: &Instruction, memory: &mut Memory) {
        match ins.mode {
            AddressingMode::Immediate => {
                self.regs.write_slot(ins.dest, memory.read_byte(ins.imm as u8));
            }
            AddressingMode::Register => {
                let addr = self.regs.read_slot(ins.src);
                self.regs.write_slot(ins.dest, memory.read_byte(addr));
            }
            AddressingMode::Relative => {
                let addr = offset_address(
                    self.regs.read_slot(ins.src),
                    calculate_offset(ins.imm, ins.opcode),
                );
                self.regs.write_slot(ins.dest, memory.read_byte(addr));
            }
            AddressingMode::None => memory.set_current_bank(ins.imm as u8),
        }
    }

    /// STORE, including the register-move form.
    fn execute_store(&mut self, ins: &Instruction, memory: &mut Memory) {
        match ins.mode {
            AddressingMode::Immediate => {
                memory.write_byte(ins.imm as u8, self.regs.read_slot(ins.src));
            }
            AddressingMode::Register => {
                let addr = self.regs.read_slot(ins.dest);
                memory.write_byte(addr, self.regs.read_slot(ins.src));
            }
            AddressingMode::Relative => {
                let addr = offset_address(
                    self.regs.read_slot(ins.src),
                    calculate_offset(ins.imm, ins.opcode),
                );
                memory.write_byte(addr, self.regs.read_slot(ins.src2));
            }
            AddressingMode::None => {
                let val = self.regs.read_slot(ins.src);
                self.regs.write_slot(ins.dest, val);
            }
        }
    }

    /// JUMP, JUMPZ, JUMPNZ, JUMPN and the halt sentinel.
    fn execute_jump(&mut self, ins: &Instruction) {
        let target = match ins.mode {
            AddressingMode::Immediate => ins.imm as u8,
            AddressingMode::Register => self.regs.read_slot(ins.src),
            AddressingMode::Relative => {
                offset_address(self.pc, calculate_offset(ins.imm, ins.opcode))
            }
            AddressingMode::None => {
                self.halted = true;
                return;
            }
        };

        if self.jump_taken(ins.opcode) {
            self.pc = target;
        }
    }

    /// Evaluates the branch predicate of a JUMP-family opcode against the PSW.
    pub const fn jump_taken(&self, opcode: Opcode) -> bool {
        match opcode {
            Opcode::JumpZ => matches!(self.psw, Psw::Zero),
            Opcode::JumpNz => matches!(self.psw, Psw::None),
            Opcode::JumpN => matches!(self.psw, Psw::Negative),
            _ => true,
        }
    }
}
