//! DLW-1 emulator library.
//!
//! This crate implements an emulator for the DLW-1, a teaching 8-bit CPU with
//! four registers and banked 256-byte memory. It provides:
//! 1. **ISA:** The 16-bit instruction model, decoder, and disassembler.
//! 2. **Core:** CPU state (registers, PC, IR, PSW) and the fetch, decode, execute cycle.
//! 3. **Memory:** Banked main memory with a current-bank selector.
//! 4. **Simulation:** Program loading, the run loop, observers, and state rendering.
//! 5. **Configuration and statistics:** JSON configuration and per-run counters.
//!
//! # Example
//!
//! ```
//! use dlw1_core::{Config, Simulator};
//! use dlw1_core::sim::NullObserver;
//!
//! // add a, #5, b ; halt
//! let program = [0b0000_0101, 0b0100_0001, 0b1111_1111, 0b0000_1000];
//!
//! let mut sim = Simulator::new(&Config::default());
//! sim.load_program(&program).unwrap();
//! let summary = sim.run(&mut NullObserver).unwrap();
//!
//! assert_eq!(summary.instructions, 2);
//! assert_eq!(sim.cpu().register(dlw1_core::common::RegisterId::B), 5);
//! ```

/// Common types and constants (bank geometry, registers, errors).
pub mod common;
/// Emulator configuration (defaults, JSON structures, validation).
pub mod config;
/// CPU core (register file, PSW, fetch, decode, execute).
pub mod core;
/// Instruction set (instruction model, decode, disassembly).
pub mod isa;
/// Program loader, simulator driver, observers, and rendering.
pub mod sim;
/// Banked main memory.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse JSON.
pub use crate::config::Config;
/// CPU architectural state and cycle primitives.
pub use crate::core::Cpu;
/// Driver that owns the CPU and memory; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Banked main memory.
pub use crate::soc::Memory;
