//! Shared helpers for the DLW-1 test suite.

#![allow(missing_docs)]

/// Instruction word and program image builders.
pub mod encode;

/// CPU and memory harness.
pub mod harness;
