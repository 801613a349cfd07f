//! Errors raised when decoding host-supplied values.

use thiserror::Error;

/// Errors for values that do not name a Kawari operation.
///
/// The device itself never fails: arithmetic exceptions are reported
/// through `StatusFlags`, not through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KawariError {
    #[error("unknown opcode {0} (valid opcodes are 0-7)")]
    UnknownOpcode(u8),

    #[error("unknown opcode mnemonic '{0}'")]
    UnknownMnemonic(String),
}
