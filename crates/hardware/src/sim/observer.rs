//! Cycle observers.
//!
//! The driver reports progress through the [`CycleObserver`] trait so that the
//! CPU and memory stay free of logging and I/O. Two implementations ship here:
//! [`NullObserver`], which ignores everything, and [`TracingObserver`], which
//! forwards events to `tracing`.

use tracing::{debug, info, trace};

use crate::core::Cpu;
use crate::isa::disasm::format_instruction;
use crate::isa::instruction::Instruction;
use crate::sim::render::{render_cpu, render_memory};
use crate::sim::simulator::HaltReason;
use crate::soc::Memory;

/// Receives driver events during a run.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
pub trait CycleObserver {
    /// Called once before the first cycle.
    fn on_start(&mut self, _cpu: &Cpu, _memory: &Memory) {}

    /// Called after an instruction has executed.
    ///
    /// `pc` is the address the instruction was fetched from.
    fn on_cycle(
        &mut self,
        _cycle: u64,
        _pc: u8,
        _ins: &Instruction,
        _cpu: &Cpu,
        _memory: &Memory,
    ) {
    }

    /// Called once when the CPU halts.
    fn on_halt(&mut self, _reason: HaltReason, _cpu: &Cpu, _memory: &Memory) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CycleObserver for NullObserver {}

/// Observer that emits `tracing` events.
///
/// Each executed instruction is logged at `debug` as a one-line disassembly.
/// With `trace_state` set, the rendered CPU box follows at `trace`, and the
/// final memory image is logged at `trace` on halt.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    trace_state: bool,
}

impl TracingObserver {
    /// Creates an observer; `trace_state` enables per-cycle CPU dumps.
    pub const fn new(trace_state: bool) -> Self {
        Self { trace_state }
    }
}

impl CycleObserver for TracingObserver {
    fn on_start(&mut self, cpu: &Cpu, memory: &Memory) {
        info!(
            banks = memory.num_banks(),
            pc = cpu.pc(),
            "starting execution"
        );
    }

    fn on_cycle(&mut self, cycle: u64, pc: u8, ins: &Instruction, cpu: &Cpu, memory: &Memory) {
        debug!(
            cycle,
            pc,
            bank = memory.current_bank(),
            raw = %format!("{:#06x}", ins.raw),
            "{}",
            format_instruction(ins)
        );
        if self.trace_state {
            trace!("\n{}", render_cpu(cpu));
        }
    }

    fn on_halt(&mut self, reason: HaltReason, cpu: &Cpu, memory: &Memory) {
        info!(pc = cpu.pc(), "halted: {reason}");
        if self.trace_state {
            trace!("\n{}", render_memory(memory));
        }
    }
}
