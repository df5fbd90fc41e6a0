//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Bank geometry and bank-count limits.
//! 2. **Instruction Constants:** Instruction width and field masks for decoding.
//! 3. **Fetch Constants:** The program counter ceiling beyond which fetch halts.

/// Size of one memory bank in bytes.
pub const BANK_SIZE: usize = 256;

/// Smallest number of banks a machine may be configured with.
pub const MIN_BANKS: u8 = 1;

/// Largest number of banks a machine may be configured with.
pub const MAX_BANKS: u8 = 255;

/// Default number of banks when none is configured.
pub const DEFAULT_NUM_BANKS: u8 = 1;

/// Size of one instruction in bytes.
pub const INSTRUCTION_SIZE: u8 = 2;

/// Highest program counter value from which a full instruction can still be fetched.
///
/// Fetching at a larger PC would read past the end of the bank, so the CPU halts instead.
pub const LAST_FETCH_PC: u8 = 254;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 4;

/// Mask for a 2-bit register id field.
pub const REG_FIELD_MASK: u16 = 0b11;

/// Mask for the 3-bit opcode field.
pub const OPCODE_FIELD_MASK: u16 = 0b111;

/// Mask for an 8-bit immediate field.
pub const IMM8_MASK: u16 = 0xFF;

/// Mask for the 9-bit relative jump immediate.
pub const IMM9_MASK: u16 = 0x1FF;

/// Largest program image accepted by file validation (64 KiB).
pub const MAX_PROGRAM_FILE_SIZE: u64 = 64 * 1024;
