//! Host-side driver for the math co-processor.
//!
//! Everything here goes through `Bus` peeks and pokes, so the same client
//! drives the simulated `HostBus` or any other bus that maps a Kawari at
//! the standard addresses.

use emu_core::Bus;
use tracing::debug;

use crate::opcode::Opcode;
use crate::registers::{OP_1_HI, OP_1_LO, OP_2_HI, OP_2_LO, OPER};
use crate::status::StatusFlags;

/// 16-bit result plus the status byte read after the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResponse {
    pub result: i16,
    pub flags: StatusFlags,
}

impl AluResponse {
    /// Result reinterpreted as unsigned, for UADD/USUB.
    #[must_use]
    pub const fn result_unsigned(&self) -> u16 {
        self.result as u16
    }
}

/// Both register pairs after an operation, for multiply and divide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideResponse {
    /// OP_1 pair: product high word or remainder.
    pub high: u16,
    /// OP_2 pair: product low word or quotient.
    pub low: u16,
    pub flags: StatusFlags,
}

impl WideResponse {
    /// `(high << 16) | low`.
    #[must_use]
    pub const fn value(&self) -> u32 {
        ((self.high as u32) << 16) | self.low as u32
    }

    /// Signed 32-bit product of SMULT.
    #[must_use]
    pub const fn signed_value(&self) -> i32 {
        self.value() as i32
    }

    #[must_use]
    pub const fn quotient(&self) -> u16 {
        self.low
    }

    #[must_use]
    pub const fn remainder(&self) -> u16 {
        self.high
    }
}

/// Register-mapped ALU client over a borrowed bus.
///
/// The mutable borrow is the only access discipline: one caller drives the
/// register set at a time.
pub struct AluClient<'a, B: Bus> {
    bus: &'a mut B,
}

impl<'a, B: Bus> AluClient<'a, B> {
    pub fn new(bus: &'a mut B) -> Self {
        Self { bus }
    }

    /// Write one byte to a host address.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Read one byte from a host address.
    pub fn peek(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    fn load(&mut self, op1: u16, op2: u16, opcode: Opcode) {
        self.poke(OP_1_HI, (op1 >> 8) as u8);
        self.poke(OP_1_LO, op1 as u8);
        self.poke(OP_2_HI, (op2 >> 8) as u8);
        self.poke(OP_2_LO, op2 as u8);
        // Writing the opcode starts the operation
        self.poke(OPER, opcode.code());
    }

    fn read_pair(&mut self, hi: u16, lo: u16) -> u16 {
        let hi = self.peek(hi);
        let lo = self.peek(lo);
        (u16::from(hi) << 8) | u16::from(lo)
    }

    /// Run one operation and read back the OP_2 result and status.
    pub fn execute(&mut self, op1: i16, op2: i16, opcode: Opcode) -> AluResponse {
        self.load(op1 as u16, op2 as u16, opcode);
        let result = self.read_pair(OP_2_HI, OP_2_LO) as i16;
        let flags = self.status();
        debug!(%opcode, op1, op2, result, %flags, "alu execute");
        AluResponse { result, flags }
    }

    /// Run one operation and read back both register pairs.
    pub fn execute_wide(&mut self, op1: u16, op2: u16, opcode: Opcode) -> WideResponse {
        self.load(op1, op2, opcode);
        let low = self.read_pair(OP_2_HI, OP_2_LO);
        let high = self.read_pair(OP_1_HI, OP_1_LO);
        let flags = self.status();
        debug!(%opcode, op1, op2, high, low, %flags, "alu execute wide");
        WideResponse { high, low, flags }
    }

    /// Re-read the status register.
    pub fn status(&mut self) -> StatusFlags {
        StatusFlags::from_bits(self.peek(OPER))
    }

    pub fn sadd(&mut self, a: i16, b: i16) -> AluResponse {
        self.execute(a, b, Opcode::Sadd)
    }

    pub fn ssub(&mut self, a: i16, b: i16) -> AluResponse {
        self.execute(a, b, Opcode::Ssub)
    }

    pub fn uadd(&mut self, a: u16, b: u16) -> AluResponse {
        self.execute(a as i16, b as i16, Opcode::Uadd)
    }

    pub fn usub(&mut self, a: u16, b: u16) -> AluResponse {
        self.execute(a as i16, b as i16, Opcode::Usub)
    }

    pub fn umult(&mut self, a: u16, b: u16) -> WideResponse {
        self.execute_wide(a, b, Opcode::Umult)
    }

    pub fn smult(&mut self, a: i16, b: i16) -> WideResponse {
        self.execute_wide(a as u16, b as u16, Opcode::Smult)
    }

    pub fn udiv(&mut self, a: u16, b: u16) -> WideResponse {
        self.execute_wide(a, b, Opcode::Udiv)
    }

    pub fn sdiv(&mut self, a: i16, b: i16) -> WideResponse {
        self.execute_wide(a as u16, b as u16, Opcode::Sdiv)
    }
}
