//! Core processor implementation.
//!
//! This module contains the DLW-1 CPU: its architectural state (register
//! file and PSW) and the fetch, decode, and execute primitives that drive it.

/// Architectural state (general-purpose registers, processor status word).
pub mod arch;

/// CPU core implementation and execution.
pub mod cpu;

pub use self::cpu::Cpu;
