//! Configuration system for the DLW-1 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (bank count, run policy).
//! 2. **Structures:** Hierarchical config for general run options and memory.
//! 3. **Validation:** Range checks on the bank count and sanity checks on the program file.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with
//! `Config::default()` and overridden from the command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MAX_BANKS, MAX_PROGRAM_FILE_SIZE, MIN_BANKS};
use crate::common::error::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    /// Number of memory banks (one 256-byte bank).
    pub const NUM_BANKS: u8 = crate::common::constants::DEFAULT_NUM_BANKS;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults. The result is not
    /// validated; call [`Config::validate`] before building a machine.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks every value that the core assumes to be in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.memory.validate()
    }
}

/// General run settings and options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit a rendered CPU state box for every cycle at trace level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort the run after this many cycles without a halt. `None` runs until halt.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Reject bank switches to banks that do not exist instead of wrapping.
    #[serde(default)]
    pub strict: bool,
}

/// Memory geometry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Number of 256-byte banks (1-255).
    #[serde(default = "MemoryConfig::default_num_banks")]
    pub num_banks: u8,
}

impl MemoryConfig {
    /// Returns the default number of banks.
    const fn default_num_banks() -> u8 {
        defaults::NUM_BANKS
    }

    /// Checks that the bank count lies in `MIN_BANKS..=MAX_BANKS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BANKS..=MAX_BANKS).contains(&self.num_banks) {
            Ok(())
        } else {
            Err(ConfigError::BankCountOutOfRange {
                got: self.num_banks,
                min: MIN_BANKS,
                max: MAX_BANKS,
            })
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            num_banks: defaults::NUM_BANKS,
        }
    }
}

/// Checks that `path` names a readable, non-empty program image of acceptable size.
///
/// # Errors
///
/// Returns the first failing check: empty path, missing file, not a regular
/// file, empty file, or a file larger than 64 KiB.
pub fn validate_program_file(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyProgramPath);
    }

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ProgramNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Inspect {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !meta.is_file() {
        return Err(ConfigError::NotARegularFile(path.to_path_buf()));
    }

    let size = meta.len();
    if size == 0 {
        return Err(ConfigError::EmptyProgram(path.to_path_buf()));
    }
    if size > MAX_PROGRAM_FILE_SIZE {
        return Err(ConfigError::ProgramTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_PROGRAM_FILE_SIZE,
        });
    }

    Ok(())
}
