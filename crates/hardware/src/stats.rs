//! Run statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Cycles:** Fetch cycles attempted and instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, move, bank switch, jump).
//! 3. **Control flow:** Jumps taken versus jumps that fell through.

use crate::isa::instruction::{AddressingMode, Instruction, Opcode};
use crate::sim::simulator::HaltReason;

/// Run statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Fetch cycles attempted, including the one that found the CPU halting.
    pub cycles: u64,
    /// Instructions executed, including the halt sentinel.
    pub instructions_retired: u64,

    /// ADD/SUB instructions.
    pub inst_alu: u64,
    /// LOAD instructions that read memory.
    pub inst_load: u64,
    /// STORE instructions that write memory.
    pub inst_store: u64,
    /// STORE-encoded register moves.
    pub inst_move: u64,
    /// LOAD-encoded bank switches.
    pub inst_bank_switch: u64,
    /// JUMP-family instructions other than the halt sentinel.
    pub inst_jump: u64,

    /// Jumps whose condition held.
    pub jumps_taken: u64,

    /// Set once the CPU halts.
    pub halt_reason: Option<HaltReason>,
}

impl SimStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one executed instruction.
    ///
    /// `taken` is only meaningful for jumps and reports whether the branch
    /// condition held.
    pub fn record(&mut self, ins: &Instruction, taken: bool) {
        self.instructions_retired += 1;

        match (ins.opcode, ins.mode) {
            (Opcode::Add | Opcode::Sub, _) => self.inst_alu += 1,
            (Opcode::Load, AddressingMode::None) => self.inst_bank_switch += 1,
            (Opcode::Load, _) => self.inst_load += 1,
            (Opcode::Store, AddressingMode::None) => self.inst_move += 1,
            (Opcode::Store, _) => self.inst_store += 1,
            (_, AddressingMode::None) => {}
            _ => {
                self.inst_jump += 1;
                if taken {
                    self.jumps_taken += 1;
                }
            }
        }
    }

    /// Fraction of jumps that were taken, or `0.0` when no jump ran.
    #[allow(clippy::cast_precision_loss)]
    pub fn taken_ratio(&self) -> f64 {
        if self.inst_jump == 0 {
            0.0
        } else {
            self.jumps_taken as f64 / self.inst_jump as f64
        }
    }

    /// Renders a multi-line report.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Cycles:               {}\n\
             Instructions retired: {}\n\
             \x20 ALU:                {}\n\
             \x20 Load:               {}\n\
             \x20 Store:              {}\n\
             \x20 Move:               {}\n\
             \x20 Bank switch:        {}\n\
             \x20 Jump:               {}\n\
             Jumps taken:          {} ({:.1}%)",
            self.cycles,
            self.instructions_retired,
            self.inst_alu,
            self.inst_load,
            self.inst_store,
            self.inst_move,
            self.inst_bank_switch,
            self.inst_jump,
            self.jumps_taken,
            self.taken_ratio() * 100.0
        );
        if let Some(reason) = self.halt_reason {
            out.push_str(&format!("\nHalt reason:          {reason}"));
        }
        out
    }
}
