//! Math co-processor status byte.

use std::fmt;

use crate::registers;

/// Status byte read back from OPER after an operation.
///
/// Bit 0 = UNDERFLOW, bit 1 = OVERFLOW, bit 2 = DIVZ. The flags are
/// informational: the caller inspects them after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusFlags(u8);

impl StatusFlags {
    pub const UNDERFLOW: u8 = registers::UNDERFLOW;
    pub const OVERFLOW: u8 = registers::OVERFLOW;
    pub const DIVZ: u8 = registers::DIVZ;

    const MASK: u8 = Self::UNDERFLOW | Self::OVERFLOW | Self::DIVZ;

    /// No flags set.
    pub const CLEAR: Self = Self(0);

    /// Interpret a raw status byte. Undefined bits are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn divide_by_zero(self) -> bool {
        self.0 & Self::DIVZ != 0
    }

    #[must_use]
    pub const fn overflow(self) -> bool {
        self.0 & Self::OVERFLOW != 0
    }

    #[must_use]
    pub const fn underflow(self) -> bool {
        self.0 & Self::UNDERFLOW != 0
    }

    #[must_use]
    pub const fn is_clear(self) -> bool {
        self.0 == 0
    }

    /// Set the given bits.
    pub fn set(&mut self, bits: u8) {
        self.0 |= bits & Self::MASK;
    }

    #[must_use]
    pub const fn with(self, bits: u8) -> Self {
        Self((self.0 | bits) & Self::MASK)
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clear() {
            return f.write_str("-");
        }
        let names = [
            (Self::UNDERFLOW, "UNDERFLOW"),
            (Self::OVERFLOW, "OVERFLOW"),
            (Self::DIVZ, "DIVZ"),
        ];
        let mut first = true;
        for (bit, name) in names {
            if self.0 & bit != 0 {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
