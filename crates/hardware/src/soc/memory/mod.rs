//! Banked System Memory.
//!
//! This module implements the DLW-1 main memory. It provides:
//! 1. **Buffer:** 256-byte backing storage for each bank (`BankBuffer`).
//! 2. **Memory:** An ordered set of banks plus the current-bank selector.
//!
//! Byte reads and writes address the current bank only, with 8-bit
//! bank-relative addresses. Memory never moves to the next bank on its own;
//! walking banks (for example while loading a program) is the caller's job.

/// Bank buffer implementation for raw byte storage.
pub mod buffer;

use self::buffer::BankBuffer;
use crate::common::constants::DEFAULT_NUM_BANKS;

/// Banked system memory.
///
/// Invariant: `current_bank < num_banks()`.
#[derive(Debug, Clone)]
pub struct Memory {
    banks: Vec<BankBuffer>,
    current_bank: u8,
}

impl Memory {
    /// Creates zero-filled memory with `num_banks` banks and bank 0 selected.
    ///
    /// The bank count is expected to be validated by the configuration layer;
    /// a count of zero is raised to one so the invariant still holds.
    pub fn new(num_banks: u8) -> Self {
        let count = num_banks.max(1) as usize;
        Self {
            banks: vec![BankBuffer::new(); count],
            current_bank: 0,
        }
    }

    /// Reads a byte from the current bank.
    #[inline]
    pub fn read_byte(&self, addr: u8) -> u8 {
        self.banks[self.current_bank as usize].read_u8(addr)
    }

    /// Writes a byte to the current bank.
    #[inline]
    pub fn write_byte(&mut self, addr: u8, val: u8) {
        self.banks[self.current_bank as usize].write_u8(addr, val);
    }

    /// Selects the current bank.
    ///
    /// Ids at or beyond [`num_banks`](Self::num_banks) wrap modulo the bank
    /// count. Callers that need to reject such ids check them beforehand.
    pub fn set_current_bank(&mut self, bank: u8) {
        self.current_bank = bank % self.num_banks();
    }

    /// Returns the currently selected bank.
    pub const fn current_bank(&self) -> u8 {
        self.current_bank
    }

    /// Returns the number of banks.
    pub fn num_banks(&self) -> u8 {
        self.banks.len() as u8
    }

    /// Total capacity in bytes across all banks.
    pub fn capacity(&self) -> usize {
        self.banks.iter().map(BankBuffer::len).sum()
    }

    /// Returns a read-only view of bank `bank`, regardless of the current selection.
    pub fn bank(&self, bank: u8) -> Option<&BankBuffer> {
        self.banks.get(bank as usize)
    }

    /// Reads a byte from any bank without changing the selection.
    pub fn peek(&self, bank: u8, addr: u8) -> Option<u8> {
        self.bank(bank).map(|b| b.read_u8(addr))
    }

    /// Iterates over all banks in order.
    pub fn banks(&self) -> impl Iterator<Item = &BankBuffer> {
        self.banks.iter()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_BANKS)
    }
}
