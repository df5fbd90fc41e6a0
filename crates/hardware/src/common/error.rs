//! Error definitions.
//!
//! This module defines the error types raised outside the instruction cycle. It provides:
//! 1. **Configuration Errors:** Bank counts and program files rejected before the machine is built.
//! 2. **Load Errors:** Failures while reading a program image into banked memory.
//! 3. **Simulation Errors:** Driver-level aborts (strict bank checking, cycle limits).
//!
//! Decoding and execution are total and never produce errors; the only abnormal
//! termination of the CPU itself is the designed halt.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors detected while validating a configuration or program file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bank count outside `MIN_BANKS..=MAX_BANKS`.
    #[error("invalid configuration: number of banks must be between {min} and {max}, got {got}")]
    BankCountOutOfRange {
        /// Requested bank count.
        got: u8,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },

    /// No program path was supplied.
    #[error("invalid configuration: program file path is empty")]
    EmptyProgramPath,

    /// The program file does not exist.
    #[error("program file does not exist: {}", .0.display())]
    ProgramNotFound(PathBuf),

    /// The program path names a directory, socket, or other non-regular file.
    #[error("program file is not a regular file: {}", .0.display())]
    NotARegularFile(PathBuf),

    /// The program file has no content.
    #[error("program file is empty: {}", .0.display())]
    EmptyProgram(PathBuf),

    /// The program file exceeds the accepted image size.
    #[error("program file too large ({size} bytes, max: {max}): {}", path.display())]
    ProgramTooLarge {
        /// Offending file.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Maximum accepted size in bytes.
        max: u64,
    },

    /// The file metadata could not be read.
    #[error("cannot inspect '{}': {source}", path.display())]
    Inspect {
        /// File being inspected.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A JSON configuration document failed to parse.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration document could not be read.
    #[error("cannot read configuration: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading a program image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Read {
        /// Program file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The image does not fit into the configured banks.
    #[error("program of {size} bytes does not fit in {num_banks} bank(s) ({capacity} bytes)")]
    ProgramTooLarge {
        /// Image size in bytes.
        size: usize,
        /// Configured bank count.
        num_banks: u8,
        /// Total memory capacity in bytes.
        capacity: usize,
    },
}

/// Errors that abort a run in the driver.
///
/// These are policies layered on top of the core; the CPU itself never raises them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Strict mode rejected a bank switch to a bank that does not exist.
    #[error("bank overflow at pc {pc:#04x}: switch to bank {bank} but only {num_banks} bank(s) exist")]
    BankOverflow {
        /// Address of the offending instruction.
        pc: u8,
        /// Requested bank id.
        bank: u8,
        /// Configured bank count.
        num_banks: u8,
    },

    /// The program did not halt within the configured cycle budget.
    #[error("cycle limit of {limit} exceeded without halting")]
    CycleLimitExceeded {
        /// Configured limit.
        limit: u64,
    },
}

/// Umbrella error for callers that drive the whole emulator.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or program file validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Program loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The run was aborted by the driver.
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Result alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
