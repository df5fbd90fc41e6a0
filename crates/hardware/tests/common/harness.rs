use dlw1_core::common::{RegisterId, SimError};
use dlw1_core::config::Config;
use dlw1_core::core::Cpu;
use dlw1_core::core::arch::Psw;
use dlw1_core::isa::decode::decode;
use dlw1_core::sim::{NullObserver, RunSummary, Simulator};
use dlw1_core::soc::Memory;

use super::encode::image;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A CPU and a memory, for executing single instructions from a known state.
pub struct TestContext {
    pub cpu: Cpu,
    pub memory: Memory,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();
        Self {
            cpu: Cpu::new(),
            memory: Memory::default(),
        }
    }

    pub fn with_banks(mut self, num_banks: u8) -> Self {
        self.memory = Memory::new(num_banks);
        self
    }

    /// Presets registers `A, B, C, D`.
    pub fn with_regs(mut self, regs: [u8; 4]) -> Self {
        self.cpu = Cpu::from_parts(regs, self.cpu.pc(), self.cpu.psw());
        self
    }

    pub fn with_pc(mut self, pc: u8) -> Self {
        self.cpu = Cpu::from_parts(self.cpu.registers(), pc, self.cpu.psw());
        self
    }

    pub fn with_psw(mut self, psw: Psw) -> Self {
        self.cpu = Cpu::from_parts(self.cpu.registers(), self.cpu.pc(), psw);
        self
    }

    /// Writes `val` at `addr` of the current bank.
    pub fn with_byte(mut self, addr: u8, val: u8) -> Self {
        self.memory.write_byte(addr, val);
        self
    }

    /// Decodes and executes `raw` without fetching.
    pub fn execute(&mut self, raw: u16) {
        let ins = decode(raw);
        self.cpu.execute(&ins, &mut self.memory);
    }

    pub fn reg(&self, id: RegisterId) -> u8 {
        self.cpu.register(id)
    }
}

/// Builds a simulator from `config`, loads `words`, and runs it to completion.
pub fn run_program(config: &Config, words: &[u16]) -> (Simulator, Result<RunSummary, SimError>) {
    init_tracing();
    let mut sim = Simulator::new(config);
    sim.load_program(&image(words)).unwrap();
    let result = sim.run(&mut NullObserver);
    (sim, result)
}
