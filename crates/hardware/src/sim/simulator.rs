//! Simulator: owns the CPU, memory, and run statistics side by side.
//!
//! The CPU only borrows memory for the duration of a cycle, so the driver
//! keeps both and applies run policy around them: the cycle budget, strict
//! bank checking, statistics, and observer notification.

use std::fmt;

use tracing::{info, warn};

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::instruction::Instruction;
use crate::sim::loader;
use crate::sim::observer::CycleObserver;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Why the CPU stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A JUMP-family instruction with NONE addressing executed at `pc`.
    HaltInstruction {
        /// Address of the halt instruction.
        pc: u8,
    },
    /// Fetch found the PC past the last full instruction slot of the bank.
    PcOverrun {
        /// PC at the failed fetch.
        pc: u8,
    },
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HaltInstruction { pc } => write!(f, "halt instruction at pc {pc}"),
            Self::PcOverrun { pc } => write!(f, "pc {pc} ran past the end of the bank"),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles attempted, including the final one.
    pub cycles: u64,
    /// Instructions executed, including the halt instruction.
    pub instructions: u64,
    /// Why the run stopped.
    pub reason: HaltReason,
}

/// Top-level simulator: CPU state, banked memory, and run policy.
#[derive(Debug, Clone)]
pub struct Simulator {
    cpu: Cpu,
    memory: Memory,
    config: Config,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with zeroed memory of `config.memory.num_banks`
    /// banks and a CPU reset to PC 0.
    ///
    /// The configuration is expected to have passed [`Config::validate`].
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::new(config.memory.num_banks),
            config: config.clone(),
            stats: SimStats::new(),
        }
    }

    /// Loads a program image into memory starting at bank 0, address 0.
    pub fn load_program(&mut self, program: &[u8]) -> Result<usize, LoadError> {
        let bytes = loader::load_program(&mut self.memory, program)?;
        info!(
            bytes,
            banks = self.memory.num_banks(),
            "program loaded"
        );
        Ok(bytes)
    }

    /// Runs one fetch, decode, execute cycle.
    ///
    /// # Returns
    ///
    /// The executed instruction, or `None` if the CPU was already halted or
    /// halted during fetch.
    ///
    /// # Errors
    ///
    /// In strict mode, [`SimError::BankOverflow`] if the instruction would
    /// switch to a bank that does not exist. The instruction is not executed.
    pub fn step(&mut self) -> Result<Option<Instruction>, SimError> {
        if self.cpu.halted() {
            return Ok(None);
        }
        self.stats.cycles += 1;

        let pc = self.cpu.pc();
        self.cpu.fetch(&self.memory);
        if self.cpu.halted() {
            self.stats.halt_reason = Some(HaltReason::PcOverrun { pc });
            return Ok(None);
        }

        let ins = self.cpu.decode();
        if self.config.general.strict && ins.is_bank_switch() {
            let num_banks = self.memory.num_banks();
            if ins.imm >= u16::from(num_banks) {
                warn!(pc, bank = ins.imm, num_banks, "bank switch out of range");
                return Err(SimError::BankOverflow {
                    pc,
                    bank: ins.imm as u8,
                    num_banks,
                });
            }
        }

        let taken = ins.opcode.is_jump() && self.cpu.jump_taken(ins.opcode);
        self.cpu.execute(&ins, &mut self.memory);
        self.stats.record(&ins, taken);
        if ins.is_halt() {
            self.stats.halt_reason = Some(HaltReason::HaltInstruction { pc });
        }

        Ok(Some(ins))
    }

    /// Runs until the CPU halts.
    ///
    /// The observer sees every executed instruction and the final halt.
    ///
    /// # Errors
    ///
    /// - [`SimError::CycleLimitExceeded`] if `general.max_cycles` cycles pass without a halt.
    /// - [`SimError::BankOverflow`] in strict mode (see [`Simulator::step`]).
    pub fn run(&mut self, observer: &mut dyn CycleObserver) -> Result<RunSummary, SimError> {
        observer.on_start(&self.cpu, &self.memory);

        let reason = loop {
            if self.cpu.halted() {
                break self
                    .stats
                    .halt_reason
                    .unwrap_or(HaltReason::PcOverrun { pc: self.cpu.pc() });
            }
            if let Some(limit) = self.config.general.max_cycles {
                if self.stats.cycles >= limit {
                    warn!(limit, pc = self.cpu.pc(), "cycle limit reached");
                    return Err(SimError::CycleLimitExceeded { limit });
                }
            }

            let pc = self.cpu.pc();
            if let Some(ins) = self.step()? {
                observer.on_cycle(self.stats.cycles, pc, &ins, &self.cpu, &self.memory);
            }
        };

        observer.on_halt(reason, &self.cpu, &self.memory);
        info!(
            cycles = self.stats.cycles,
            instructions = self.stats.instructions_retired,
            "run complete"
        );

        Ok(RunSummary {
            cycles: self.stats.cycles,
            instructions: self.stats.instructions_retired,
            reason,
        })
    }

    /// Returns the CPU.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Returns the CPU for direct state setup.
    pub const fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Returns memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns memory for direct state setup.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns the statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
