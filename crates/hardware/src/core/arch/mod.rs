//! DLW-1 architectural state.
//!
//! This module contains the programmer-visible state held by the CPU:
//! 1. **GPRs:** The four 8-bit general-purpose registers.
//! 2. **PSW:** The 2-bit processor status word.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Processor status word (condition flags).
pub mod psw;

pub use gpr::Gpr;
pub use psw::Psw;
