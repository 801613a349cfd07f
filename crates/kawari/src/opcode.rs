//! Math co-processor opcodes.

use std::fmt;
use std::str::FromStr;

use crate::error::KawariError;
use crate::registers;

/// One of the eight operations selected by writing to OPER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Unsigned 16x16 multiply, 32-bit product.
    Umult = registers::UMULT,
    /// Unsigned divide: quotient and remainder.
    Udiv = registers::UDIV,
    /// Unsigned add.
    Uadd = registers::UADD,
    /// Unsigned subtract.
    Usub = registers::USUB,
    /// Signed 16x16 multiply, 32-bit product.
    Smult = registers::SMULT,
    /// Signed divide, truncating toward zero.
    Sdiv = registers::SDIV,
    /// Signed add.
    Sadd = registers::SADD,
    /// Signed subtract.
    Ssub = registers::SSUB,
}

impl Opcode {
    /// All opcodes in wire order.
    pub const ALL: [Opcode; 8] = [
        Opcode::Umult,
        Opcode::Udiv,
        Opcode::Uadd,
        Opcode::Usub,
        Opcode::Smult,
        Opcode::Sdiv,
        Opcode::Sadd,
        Opcode::Ssub,
    ];

    /// Value written to OPER to trigger this operation.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case mnemonic as used in the register header.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Umult => "UMULT",
            Opcode::Udiv => "UDIV",
            Opcode::Uadd => "UADD",
            Opcode::Usub => "USUB",
            Opcode::Smult => "SMULT",
            Opcode::Sdiv => "SDIV",
            Opcode::Sadd => "SADD",
            Opcode::Ssub => "SSUB",
        }
    }

    /// Operands and result are interpreted as two's complement.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Opcode::Smult | Opcode::Sdiv | Opcode::Sadd | Opcode::Ssub
        )
    }

    #[must_use]
    pub const fn is_division(self) -> bool {
        matches!(self, Opcode::Udiv | Opcode::Sdiv)
    }

    #[must_use]
    pub const fn is_multiply(self) -> bool {
        matches!(self, Opcode::Umult | Opcode::Smult)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = KawariError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Opcode::ALL
            .get(code as usize)
            .copied()
            .ok_or(KawariError::UnknownOpcode(code))
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.code()
    }
}

impl FromStr for Opcode {
    type Err = KawariError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KawariError::UnknownMnemonic(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_register_header() {
        assert_eq!(Opcode::Umult.code(), 0);
        assert_eq!(Opcode::Sadd.code(), 6);
        assert_eq!(Opcode::Ssub.code(), 7);
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(op.code() as usize, i);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Opcode::try_from(5), Ok(Opcode::Sdiv));
        assert_eq!(Opcode::try_from(8), Err(KawariError::UnknownOpcode(8)));
        assert_eq!(Opcode::try_from(0xFF), Err(KawariError::UnknownOpcode(0xFF)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sadd".parse::<Opcode>(), Ok(Opcode::Sadd));
        assert_eq!("UDiv".parse::<Opcode>(), Ok(Opcode::Udiv));
        assert!(matches!(
            "sqrt".parse::<Opcode>(),
            Err(KawariError::UnknownMnemonic(s)) if s == "sqrt"
        ));
    }

    #[test]
    fn classification() {
        assert!(Opcode::Sadd.is_signed());
        assert!(!Opcode::Uadd.is_signed());
        assert!(Opcode::Sdiv.is_division());
        assert!(Opcode::Umult.is_multiply());
        assert!(!Opcode::Ssub.is_multiply());
        assert_eq!(Opcode::Smult.to_string(), "SMULT");
    }
}
