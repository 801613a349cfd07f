//! Math co-processor arithmetic.
//!
//! Operates on the raw register pairs. Operand 1 lives in OP_1_HI/LO and
//! operand 2 in OP_2_HI/LO; the primary result always replaces operand 2.
//!
//! | Opcode | OP_2 after          | OP_1 after        | Flags                  |
//! |--------|---------------------|-------------------|------------------------|
//! | UMULT  | product bits 15-0   | product bits 31-16| none                   |
//! | UDIV   | quotient            | remainder         | DIVZ                   |
//! | UADD   | sum mod 2^16        | unchanged         | OVERFLOW               |
//! | USUB   | difference mod 2^16 | unchanged         | UNDERFLOW              |
//! | SMULT  | product bits 15-0   | product bits 31-16| none                   |
//! | SDIV   | quotient            | remainder         | DIVZ, OVERFLOW         |
//! | SADD   | sum mod 2^16        | unchanged         | OVERFLOW, UNDERFLOW    |
//! | SSUB   | difference mod 2^16 | unchanged         | OVERFLOW, UNDERFLOW    |
//!
//! On divide-by-zero both operand pairs are left untouched.

use crate::opcode::Opcode;
use crate::status::StatusFlags;

/// Register pair contents after an operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub op1: u16,
    pub op2: u16,
    pub status: StatusFlags,
}

/// Run `opcode` over the two operand words.
#[must_use]
pub fn compute(opcode: Opcode, op1: u16, op2: u16) -> Outcome {
    match opcode {
        Opcode::Sadd => signed_range(op1, (op1 as i16 as i32) + (op2 as i16 as i32)),
        Opcode::Ssub => signed_range(op1, (op1 as i16 as i32) - (op2 as i16 as i32)),
        Opcode::Uadd => {
            let exact = u32::from(op1) + u32::from(op2);
            let status = if exact > 0xFFFF {
                StatusFlags::CLEAR.with(StatusFlags::OVERFLOW)
            } else {
                StatusFlags::CLEAR
            };
            Outcome {
                op1,
                op2: exact as u16,
                status,
            }
        }
        Opcode::Usub => {
            let status = if op2 > op1 {
                StatusFlags::CLEAR.with(StatusFlags::UNDERFLOW)
            } else {
                StatusFlags::CLEAR
            };
            Outcome {
                op1,
                op2: op1.wrapping_sub(op2),
                status,
            }
        }
        Opcode::Umult => split_product(u32::from(op1) * u32::from(op2)),
        Opcode::Smult => split_product(((op1 as i16 as i32) * (op2 as i16 as i32)) as u32),
        Opcode::Udiv => {
            if op2 == 0 {
                return divide_by_zero(op1, op2);
            }
            Outcome {
                op1: op1 % op2,
                op2: op1 / op2,
                status: StatusFlags::CLEAR,
            }
        }
        Opcode::Sdiv => {
            let (a, b) = (op1 as i16, op2 as i16);
            if b == 0 {
                return divide_by_zero(op1, op2);
            }
            // -32768 / -1 is the one quotient that does not fit
            let status = if a == i16::MIN && b == -1 {
                StatusFlags::CLEAR.with(StatusFlags::OVERFLOW)
            } else {
                StatusFlags::CLEAR
            };
            Outcome {
                op1: a.wrapping_rem(b) as u16,
                op2: a.wrapping_div(b) as u16,
                status,
            }
        }
    }
}

fn signed_range(op1: u16, exact: i32) -> Outcome {
    let mut status = StatusFlags::CLEAR;
    if exact > i32::from(i16::MAX) {
        status.set(StatusFlags::OVERFLOW);
    } else if exact < i32::from(i16::MIN) {
        status.set(StatusFlags::UNDERFLOW);
    }
    Outcome {
        op1,
        op2: exact as u16,
        status,
    }
}

fn split_product(product: u32) -> Outcome {
    Outcome {
        op1: (product >> 16) as u16,
        op2: product as u16,
        status: StatusFlags::CLEAR,
    }
}

fn divide_by_zero(op1: u16, op2: u16) -> Outcome {
    Outcome {
        op1,
        op2,
        status: StatusFlags::CLEAR.with(StatusFlags::DIVZ),
    }
}
