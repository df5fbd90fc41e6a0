//! Program Loader.
//!
//! This module moves a pre-assembled program image into banked memory. It performs:
//! 1. **Binary loading:** Reads a program image from disk into a byte buffer.
//! 2. **Bank filling:** Writes the image into bank 0, then bank 1, and so on, 256 bytes per bank.
//! 3. **Reset:** Leaves bank 0 selected so execution starts at bank 0, address 0.

use std::fs;
use std::path::Path;

use crate::common::constants::BANK_SIZE;
use crate::common::error::LoadError;
use crate::soc::Memory;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the program image.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a program image into memory, bank by bank.
///
/// Bytes `0..256` go to bank 0, `256..512` to bank 1, and so on. Memory
/// never advances banks on its own, so the loader selects each bank in
/// turn and restores bank 0 when done.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// [`LoadError::ProgramTooLarge`] if the image exceeds the memory capacity;
/// memory is left untouched in that case.
pub fn load_program(memory: &mut Memory, program: &[u8]) -> Result<usize, LoadError> {
    let capacity = memory.capacity();
    if program.len() > capacity {
        return Err(LoadError::ProgramTooLarge {
            size: program.len(),
            num_banks: memory.num_banks(),
            capacity,
        });
    }

    for (bank, chunk) in program.chunks(BANK_SIZE).enumerate() {
        memory.set_current_bank(bank as u8);
        for (addr, &byte) in chunk.iter().enumerate() {
            memory.write_byte(addr as u8, byte);
        }
    }
    memory.set_current_bank(0);

    Ok(program.len())
}

/// Reads `path` and loads it into memory.
pub fn load_program_file(memory: &mut Memory, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let program = load_binary(path)?;
    load_program(memory, &program)
}
