//! Bank Buffer Implementation.
//!
//! This module provides the storage for a single 256-byte memory bank. Because
//! bank-relative addresses are 8-bit, every address is in range and indexing
//! never needs a bounds check beyond the type itself.

use std::ops::{Index, IndexMut};

use crate::common::constants::BANK_SIZE;

/// One 256-byte memory bank.
#[derive(Clone, PartialEq, Eq)]
pub struct BankBuffer {
    bytes: [u8; BANK_SIZE],
}

impl BankBuffer {
    /// Creates a zero-filled bank.
    pub const fn new() -> Self {
        Self {
            bytes: [0; BANK_SIZE],
        }
    }

    /// Returns the size of the bank in bytes.
    pub const fn len(&self) -> usize {
        BANK_SIZE
    }

    /// Always `false`; a bank is never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads a single byte.
    #[inline]
    pub const fn read_u8(&self, addr: u8) -> u8 {
        self.bytes[addr as usize]
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, addr: u8, val: u8) {
        self.bytes[addr as usize] = val;
    }

    /// Returns the whole bank as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for BankBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BankBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("BankBuffer")
            .field("len", &BANK_SIZE)
            .field("non_zero", &used)
            .finish()
    }
}

impl Index<u8> for BankBuffer {
    /// Output type for indexing operations (u8).
    type Output = u8;

    fn index(&self, index: u8) -> &Self::Output {
        &self.bytes[index as usize]
    }
}

impl IndexMut<u8> for BankBuffer {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        &mut self.bytes[index as usize]
    }
}
