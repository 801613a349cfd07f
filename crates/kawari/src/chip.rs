//! Kawari register file.
//!
//! Decodes the 64-register VIC-II window. The stock VIC-II registers are
//! held as plain latches; video timing lives elsewhere. The extension
//! block is where the Kawari differs from a 6567/6569:
//!
//! | Reg     | Name        | Description                                |
//! |---------|-------------|--------------------------------------------|
//! | $2F     | OP_1_HI     | Operand 1 high byte (remainder / product hi)|
//! | $30     | OP_1_LO     | Operand 1 low byte                         |
//! | $31     | OP_2_HI     | Operand 2 high byte / result high byte     |
//! | $32     | OP_2_LO     | Operand 2 low byte / result low byte       |
//! | $33     | OPER        | Write: opcode trigger. Read: status byte   |
//! | $34-$3F | SPI/VIDEO_* | Latched, no behaviour                      |

use emu_core::{Observable, Value};
use tracing::{debug, trace};

use crate::math;
use crate::opcode::Opcode;
use crate::registers::{
    REG_LAST_VIC, REG_OP_1_HI, REG_OP_1_LO, REG_OP_2_HI, REG_OP_2_LO, REG_OPER, REG_SPI,
};
use crate::status::StatusFlags;

const VIC_REGS: usize = REG_LAST_VIC as usize + 1;
const EXT_REGS: usize = 0x40 - REG_SPI as usize;

/// Kawari VIC-II replacement, register view.
pub struct Kawari {
    /// Stock VIC-II registers $00-$2E.
    vic_regs: [u8; VIC_REGS],
    /// Operand 1 pair ($2F/$30).
    op1: u16,
    /// Operand 2 / result pair ($31/$32).
    op2: u16,
    /// Status from the last completed operation.
    status: StatusFlags,
    /// Extension latches $34-$3F.
    ext_regs: [u8; EXT_REGS],
    /// Opcode of the last completed operation.
    last_opcode: Option<Opcode>,
    /// Operations completed since reset.
    operations: u64,
}

impl Kawari {
    #[must_use]
    pub fn new() -> Self {
        Self {
            vic_regs: [0; VIC_REGS],
            op1: 0,
            op2: 0,
            status: StatusFlags::CLEAR,
            ext_regs: [0; EXT_REGS],
            last_opcode: None,
            operations: 0,
        }
    }

    /// Clear every register back to power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read a register. Only the low six bits of `reg` are decoded.
    #[must_use]
    pub fn read(&self, reg: u8) -> u8 {
        match reg & 0x3F {
            r if r <= REG_LAST_VIC => self.vic_regs[r as usize],
            REG_OP_1_HI => (self.op1 >> 8) as u8,
            REG_OP_1_LO => self.op1 as u8,
            REG_OP_2_HI => (self.op2 >> 8) as u8,
            REG_OP_2_LO => self.op2 as u8,
            REG_OPER => self.status.bits(),
            r => self.ext_regs[(r - REG_SPI) as usize],
        }
    }

    /// Write a register. Writing OPER runs the selected operation at once.
    pub fn write(&mut self, reg: u8, value: u8) {
        trace!(reg = reg & 0x3F, value, "kawari write");
        match reg & 0x3F {
            r if r <= REG_LAST_VIC => self.vic_regs[r as usize] = value,
            REG_OP_1_HI => self.op1 = (self.op1 & 0x00FF) | (u16::from(value) << 8),
            REG_OP_1_LO => self.op1 = (self.op1 & 0xFF00) | u16::from(value),
            REG_OP_2_HI => self.op2 = (self.op2 & 0x00FF) | (u16::from(value) << 8),
            REG_OP_2_LO => self.op2 = (self.op2 & 0xFF00) | u16::from(value),
            REG_OPER => match Opcode::try_from(value) {
                Ok(opcode) => self.execute(opcode),
                Err(e) => debug!(%e, "ignoring OPER write"),
            },
            r => self.ext_regs[(r - REG_SPI) as usize] = value,
        }
    }

    fn execute(&mut self, opcode: Opcode) {
        let out = math::compute(opcode, self.op1, self.op2);
        trace!(
            %opcode,
            op1 = self.op1,
            op2 = self.op2,
            result = out.op2,
            status = %out.status,
            "kawari operation"
        );
        self.op1 = out.op1;
        self.op2 = out.op2;
        self.status = out.status;
        self.last_opcode = Some(opcode);
        self.operations += 1;
    }

    /// Operand 1 register pair.
    #[must_use]
    pub fn op1(&self) -> u16 {
        self.op1
    }

    /// Operand 2 / result register pair.
    #[must_use]
    pub fn op2(&self) -> u16 {
        self.op2
    }

    #[must_use]
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    #[must_use]
    pub fn last_opcode(&self) -> Option<Opcode> {
        self.last_opcode
    }

    #[must_use]
    pub fn operations(&self) -> u64 {
        self.operations
    }
}

impl Default for Kawari {
    fn default() -> Self {
        Self::new()
    }
}

const QUERY_PATHS: &[&str] = &[
    "op1",
    "op2",
    "result",
    "status",
    "status.divz",
    "status.overflow",
    "status.underflow",
    "last_opcode",
    "operations",
];

impl Observable for Kawari {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "op1" => Some(self.op1.into()),
            "op2" => Some(self.op2.into()),
            "result" => Some((self.op2 as i16).into()),
            "status" => Some(self.status.bits().into()),
            "status.divz" => Some(self.status.divide_by_zero().into()),
            "status.overflow" => Some(self.status.overflow().into()),
            "status.underflow" => Some(self.status.underflow().into()),
            "last_opcode" => Some(
                self.last_opcode
                    .map_or_else(|| "none".into(), |op| op.mnemonic().into()),
            ),
            "operations" => Some(self.operations.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::REG_VIDEO_MEM_FLAGS;

    fn load(k: &mut Kawari, a: i16, b: i16) {
        k.write(REG_OP_1_HI, ((a as u16) >> 8) as u8);
        k.write(REG_OP_1_LO, a as u8);
        k.write(REG_OP_2_HI, ((b as u16) >> 8) as u8);
        k.write(REG_OP_2_LO, b as u8);
    }

    #[test]
    fn operand_bytes_read_back() {
        let mut k = Kawari::new();
        load(&mut k, 0x1234, -2);
        assert_eq!(k.read(REG_OP_1_HI), 0x12);
        assert_eq!(k.read(REG_OP_1_LO), 0x34);
        assert_eq!(k.read(REG_OP_2_HI), 0xFF);
        assert_eq!(k.read(REG_OP_2_LO), 0xFE);
    }

    #[test]
    fn oper_write_triggers_and_read_returns_status() {
        let mut k = Kawari::new();
        load(&mut k, 32767, 2);
        k.write(REG_OPER, Opcode::Sadd.code());
        assert_eq!(k.op2() as i16, -32767);
        assert_eq!(k.read(REG_OPER), StatusFlags::OVERFLOW);
        assert_eq!(k.last_opcode(), Some(Opcode::Sadd));
        assert_eq!(k.operations(), 1);
    }

    #[test]
    fn result_query_is_signed() {
        let mut k = Kawari::new();
        load(&mut k, -257, 64);
        k.write(REG_OPER, Opcode::Sadd.code());
        assert_eq!(k.query("result"), Some(Value::I16(-193)));
        assert_eq!(k.query("op2"), Some(Value::U16(0xFF3F)));
    }

    #[test]
    fn status_cleared_by_next_operation() {
        let mut k = Kawari::new();
        load(&mut k, 32767, 2);
        k.write(REG_OPER, Opcode::Sadd.code());
        load(&mut k, 8, 3);
        k.write(REG_OPER, Opcode::Sadd.code());
        assert_eq!(k.read(REG_OPER), 0);
        assert_eq!(k.op2(), 11);
    }

    #[test]
    fn invalid_opcode_is_ignored() {
        let mut k = Kawari::new();
        load(&mut k, 1, 2);
        k.write(REG_OPER, 0x08);
        assert_eq!(k.op2(), 2);
        assert_eq!(k.operations(), 0);
        assert_eq!(k.last_opcode(), None);
    }

    #[test]
    fn register_window_mirrors() {
        let mut k = Kawari::new();
        k.write(0x40 | REG_OP_1_LO, 0x99);
        assert_eq!(k.read(REG_OP_1_LO), 0x99);
    }

    #[test]
    fn vic_and_extension_latches() {
        let mut k = Kawari::new();
        k.write(0x20, 0x0E);
        k.write(REG_SPI, 0xA5);
        k.write(REG_VIDEO_MEM_FLAGS, 0x60);
        assert_eq!(k.read(0x20), 0x0E);
        assert_eq!(k.read(REG_SPI), 0xA5);
        assert_eq!(k.read(REG_VIDEO_MEM_FLAGS), 0x60);
    }

    #[test]
    fn reset_clears_everything() {
        let mut k = Kawari::new();
        load(&mut k, 5, 0);
        k.write(REG_OPER, Opcode::Udiv.code());
        k.reset();
        assert_eq!(k.status(), StatusFlags::CLEAR);
        assert_eq!(k.op1(), 0);
        assert_eq!(k.operations(), 0);
    }

    #[test]
    fn observable_paths() {
        let mut k = Kawari::new();
        load(&mut k, 5, 0);
        k.write(REG_OPER, Opcode::Udiv.code());
        assert_eq!(k.query("status.divz"), Some(Value::Bool(true)));
        assert_eq!(k.query("op1"), Some(Value::U16(5)));
        assert_eq!(k.query("result"), Some(Value::I16(0)));
        assert_eq!(k.query("last_opcode"), Some(Value::String("UDIV".into())));
        assert_eq!(k.query("operations"), Some(Value::U64(1)));
        assert_eq!(k.query("bogus"), None);
        for path in k.query_paths() {
            assert!(k.query(path).is_some(), "{path}");
        }
    }
}
