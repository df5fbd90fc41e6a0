//! # Error Display Tests
//!
//! Checks the messages users see when configuration, loading, or a run fails.

use std::path::PathBuf;

use dlw1_core::common::{ConfigError, Error, LoadError, SimError};

#[test]
fn test_bank_count_message_names_range() {
    let err = ConfigError::BankCountOutOfRange {
        got: 0,
        min: 1,
        max: 255,
    };
    assert_eq!(
        err.to_string(),
        "invalid configuration: number of banks must be between 1 and 255, got 0"
    );
}

#[test]
fn test_program_not_found_message_names_path() {
    let err = ConfigError::ProgramNotFound(PathBuf::from("missing.bin"));
    assert_eq!(err.to_string(), "program file does not exist: missing.bin");
}

#[test]
fn test_load_too_large_message() {
    let err = LoadError::ProgramTooLarge {
        size: 300,
        num_banks: 1,
        capacity: 256,
    };
    assert_eq!(
        err.to_string(),
        "program of 300 bytes does not fit in 1 bank(s) (256 bytes)"
    );
}

#[test]
fn test_bank_overflow_message() {
    let err = SimError::BankOverflow {
        pc: 4,
        bank: 3,
        num_banks: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains("pc 0x04"), "{msg}");
    assert!(msg.contains("bank 3"), "{msg}");
    assert!(msg.contains("only 2 bank(s)"), "{msg}");
}

#[test]
fn test_umbrella_error_is_transparent() {
    let inner = SimError::CycleLimitExceeded { limit: 10 };
    let outer: Error = inner.clone().into();
    assert_eq!(outer.to_string(), inner.to_string());
    assert!(matches!(outer, Error::Sim(SimError::CycleLimitExceeded { limit: 10 })));
}

#[test]
fn test_config_error_converts_into_umbrella() {
    let outer: Error = ConfigError::EmptyProgramPath.into();
    assert!(matches!(outer, Error::Config(ConfigError::EmptyProgramPath)));
}
