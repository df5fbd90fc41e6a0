//! Memory system of the DLW-1 machine.
//!
//! The DLW-1 has no devices or bus beyond its banked main memory, so this
//! module only hosts [`memory::Memory`] and its bank storage.

/// Banked main memory and bank buffers.
pub mod memory;

pub use memory::Memory;
