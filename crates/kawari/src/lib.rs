//! Kawari VIC-II replacement: extension registers and math co-processor.
//!
//! The Kawari sits in the C64's VIC-II socket and answers at $D000-$D03F
//! (mirrored through $D3FF). Registers $2F-$33 form a 16-bit arithmetic
//! unit: poke two operands, poke an opcode to OPER, then peek the result
//! from the operand 2 pair and the status from OPER.
//!
//! # Math registers
//!
//! | Addr  | Name    | Write              | Read                  |
//! |-------|---------|--------------------|-----------------------|
//! | $D02F | OP_1_HI | Operand 1 high     | Product hi / remainder|
//! | $D030 | OP_1_LO | Operand 1 low      |                       |
//! | $D031 | OP_2_HI | Operand 2 high     | Result high           |
//! | $D032 | OP_2_LO | Operand 2 low      | Result low            |
//! | $D033 | OPER    | Opcode (0-7), runs | Status: DIVZ/OVF/UNF  |

mod bus;
mod chip;
mod client;
mod error;
pub mod math;
mod opcode;
pub mod registers;
mod status;

pub use bus::HostBus;
pub use chip::Kawari;
pub use client::{AluClient, AluResponse, WideResponse};
pub use error::KawariError;
pub use opcode::Opcode;
pub use status::StatusFlags;
