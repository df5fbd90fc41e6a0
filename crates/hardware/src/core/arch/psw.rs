//! Processor Status Word.
//!
//! The PSW records the outcome of the most recent ADD or SUB. It is a 2-bit
//! value whose bits are mutually exclusive:
//!
//! | Bits | State      |
//! |------|------------|
//! | `00` | `None`     |
//! | `01` | `Zero`     |
//! | `10` | `Negative` |
//!
//! The word is always recomputed from a result, never updated in place.

use std::fmt;

/// Bit pattern of the zero flag.
pub const PSW_ZERO: u8 = 0b01;
/// Bit pattern of the negative flag.
pub const PSW_NEGATIVE: u8 = 0b10;

/// Sign bit of an 8-bit result.
const SIGN_BIT: u8 = 0x80;

/// Condition flags produced by arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Psw {
    /// Last result was positive and non-zero.
    #[default]
    None,
    /// Last result was zero.
    Zero,
    /// Last result had bit 7 set.
    Negative,
}

impl Psw {
    /// Computes the flags for an 8-bit arithmetic result.
    #[inline]
    pub const fn from_result(result: u8) -> Self {
        if result == 0 {
            Self::Zero
        } else if result & SIGN_BIT != 0 {
            Self::Negative
        } else {
            Self::None
        }
    }

    /// Returns the 2-bit hardware encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Zero => PSW_ZERO,
            Self::Negative => PSW_NEGATIVE,
        }
    }

    /// Builds a PSW from its 2-bit encoding.
    ///
    /// The pattern `11` cannot be produced by arithmetic and reads as `None`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            PSW_ZERO => Self::Zero,
            PSW_NEGATIVE => Self::Negative,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Psw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "NONE",
            Self::Zero => "ZERO",
            Self::Negative => "NEGATIVE",
        })
    }
}
