//! Common utilities and types used throughout the DLW-1 emulator.
//!
//! This module provides building blocks shared across all components of the emulator.
//! It includes:
//! 1. **Constants:** Bank geometry, instruction width, and field masks.
//! 2. **Error Handling:** Configuration, load, and driver error types.
//! 3. **Register Identification:** The 2-bit register id used by every encoding.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for configuration, loading, and the run loop.
pub mod error;

/// Register identifiers.
pub mod reg;

pub use constants::{BANK_SIZE, INSTRUCTION_SIZE, MAX_BANKS, MIN_BANKS};
pub use error::{ConfigError, Error, LoadError, Result, SimError};
pub use reg::RegisterId;
