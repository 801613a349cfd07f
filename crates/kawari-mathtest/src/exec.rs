//! One-shot operations for the `exec` command.
//!
//! Operands are 16-bit register words. Negative input is stored as its
//! two's-complement bits, so `-1` and `65535` load the same word; the
//! opcode decides how the word is shown back.

use kawari::{AluClient, HostBus, Opcode};

use crate::error::OperandError;

/// Parse a decimal, `$hex` or `0xhex` operand in `-32768..=65535`.
pub fn parse_operand(text: &str) -> Result<u16, OperandError> {
    let hex = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"));
    let value = match hex {
        Some(digits) => i64::from_str_radix(digits, 16),
        None => text.parse::<i64>(),
    }
    .map_err(|_| OperandError::NotANumber(text.to_string()))?;

    match value {
        -32768..=-1 => Ok((value as i16) as u16),
        0..=65535 => Ok(value as u16),
        _ => Err(OperandError::OutOfRange(value)),
    }
}

fn show(opcode: Opcode, word: u16) -> String {
    if opcode.is_signed() {
        (word as i16).to_string()
    } else {
        word.to_string()
    }
}

/// Run one operation on a fresh simulated host and describe the outcome.
#[must_use]
pub fn execute(op1: u16, op2: u16, opcode: Opcode, wide: bool) -> String {
    let mut bus = HostBus::new();
    let mut alu = AluClient::new(&mut bus);
    let (a, b) = (show(opcode, op1), show(opcode, op2));

    if wide {
        let r = alu.execute_wide(op1, op2, opcode);
        format!(
            "{opcode} {a} {b} -> OP_1=${:04X} OP_2=${:04X} (${:08X}) status {}",
            r.high,
            r.low,
            r.value(),
            r.flags
        )
    } else {
        let r = alu.execute(op1 as i16, op2 as i16, opcode);
        format!(
            "{opcode} {a} {b} -> {} (${:04X}) status {}",
            show(opcode, r.result_unsigned()),
            r.result_unsigned(),
            r.flags
        )
    }
}
