//! # Condition Code Register
//!
//! The 6800 keeps six status bits in its condition code register. Bits 6 and 7
//! are not implemented in silicon and always read back as 1.
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+---+---+---+---+---+---+---+
//! | 1 | 1 | H | I | N | Z | V | C |
//! +---+---+---+---+---+---+---+---+
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// The six implemented bits of the condition code register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ConditionCodes: u8 {
        /// Carry / borrow out of bit 7.
        const C = 0b0000_0001;
        /// Two's complement overflow.
        const V = 0b0000_0010;
        /// Result was zero.
        const Z = 0b0000_0100;
        /// Bit 7 of the result.
        const N = 0b0000_1000;
        /// Interrupt mask; IRQ is ignored while set.
        const I = 0b0001_0000;
        /// Half carry out of bit 3 (additions only).
        const H = 0b0010_0000;
    }
}

impl ConditionCodes {
    /// N, Z and V: loads, stores, logical operations.
    pub const NZV: Self = Self::N.union(Self::Z).union(Self::V);

    /// N, Z, V and C: subtract, compare, shifts, clear.
    pub const NZVC: Self = Self::NZV.union(Self::C);

    /// H, N, Z, V and C: the add family.
    pub const HNZVC: Self = Self::NZVC.union(Self::H);

    /// Bits 6 and 7, which read as 1 whenever the register is viewed as a byte.
    pub const UNUSED_BITS: u8 = 0b1100_0000;

    /// Returns the register as the CPU presents it on the data bus.
    pub const fn to_byte(self) -> u8 {
        self.bits() | Self::UNUSED_BITS
    }

    /// Builds the register from a data bus byte, discarding bits 6 and 7.
    pub const fn from_byte(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }

    /// Replaces the bits selected by `affected` with the same bits of `new`.
    ///
    /// Bits outside `affected` are left untouched, which is how every
    /// instruction preserves the flags it is not documented to change.
    pub fn merge(self, new: Self, affected: Self) -> Self {
        (self - affected) | (new & affected)
    }

    /// Returns `N` and `Z` for an 8-bit result.
    pub fn nz8(value: u8) -> Self {
        let mut cc = Self::empty();
        cc.set(Self::Z, value == 0);
        cc.set(Self::N, value & 0x80 != 0);
        cc
    }

    /// Returns `N` and `Z` for a 16-bit result.
    pub fn nz16(value: u16) -> Self {
        let mut cc = Self::empty();
        cc.set(Self::Z, value == 0);
        cc.set(Self::N, value & 0x8000 != 0);
        cc
    }
}

impl fmt::Display for ConditionCodes {
    /// Formats as `HINZVC`, with `-` for clear bits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bit = |flag: Self, c: char| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}{}{}{}",
            bit(Self::H, 'H'),
            bit(Self::I, 'I'),
            bit(Self::N, 'N'),
            bit(Self::Z, 'Z'),
            bit(Self::V, 'V'),
            bit(Self::C, 'C')
        )
    }
}
