//! Host bus: C64-style RAM with the Kawari at $D000-$D3FF.
//!
//! Implements `emu_core::Bus` so host code can peek and poke Kawari
//! registers exactly as a 6502 program would. The 64-register window
//! repeats every 64 bytes through the whole VIC-II I/O page.

use emu_core::{Bus, Observable, Value};

use crate::chip::Kawari;
use crate::registers::IO_BASE;

/// End of the VIC-II I/O page.
const IO_END: u16 = 0xD3FF;

/// A host bus with 64 KiB of RAM and a Kawari in the VIC-II slot.
pub struct HostBus {
    pub ram: Box<[u8; 0x10000]>,
    pub kawari: Kawari,
}

impl HostBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
            kawari: Kawari::new(),
        }
    }

    fn is_kawari(addr: u16) -> bool {
        (IO_BASE..=IO_END).contains(&addr)
    }
}

impl Default for HostBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for HostBus {
    fn read(&mut self, address: u16) -> u8 {
        if Self::is_kawari(address) {
            return self.kawari.read((address & 0x3F) as u8);
        }
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        // RAM under I/O still takes the write
        self.ram[address as usize] = value;

        if Self::is_kawari(address) {
            self.kawari.write((address & 0x3F) as u8, value);
        }
    }
}

const QUERY_PATHS: &[&str] = &[
    "kawari.op1",
    "kawari.op2",
    "kawari.result",
    "kawari.status",
    "kawari.status.divz",
    "kawari.status.overflow",
    "kawari.status.underflow",
    "kawari.last_opcode",
    "kawari.operations",
];

impl Observable for HostBus {
    fn query(&self, path: &str) -> Option<Value> {
        path.strip_prefix("kawari.")
            .and_then(|rest| self.kawari.query(rest))
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;
    use crate::registers::{OP_1_HI, OP_1_LO, OP_2_HI, OP_2_LO, OPER, VIDEO_MODE1};

    #[test]
    fn ram_read_write() {
        let mut bus = HostBus::new();
        bus.write(0x8000, 0xAB);
        assert_eq!(bus.read(0x8000), 0xAB);
    }

    #[test]
    fn kawari_registers_routed() {
        let mut bus = HostBus::new();
        bus.write(OP_1_HI, 0x00);
        bus.write(OP_1_LO, 0x08);
        bus.write(OP_2_HI, 0x00);
        bus.write(OP_2_LO, 0x03);
        bus.write(OPER, Opcode::Sadd.code());
        assert_eq!(bus.read(OP_2_LO), 11);
        assert_eq!(bus.read(OPER), 0);
    }

    #[test]
    fn oper_mirror_triggers() {
        let mut bus = HostBus::new();
        bus.write(OP_1_LO + 0x40, 0x02);
        bus.write(OP_2_LO + 0x40, 0x03);
        bus.write(OPER + 0x40, Opcode::Umult.code());
        assert_eq!(bus.read(OP_2_LO), 6);
        assert_eq!(bus.kawari.operations(), 1);
    }

    #[test]
    fn ram_under_io_still_written() {
        let mut bus = HostBus::new();
        bus.write(VIDEO_MODE1, 0x5C);
        assert_eq!(bus.ram[VIDEO_MODE1 as usize], 0x5C);
        assert_eq!(bus.read(VIDEO_MODE1), 0x5C);
    }

    #[test]
    fn outside_io_page_is_plain_ram() {
        let mut bus = HostBus::new();
        bus.write(0xD433, Opcode::Sadd.code());
        assert_eq!(bus.kawari.operations(), 0);
        assert_eq!(bus.read(0xD433), Opcode::Sadd.code());
    }

    #[test]
    fn observable_forwards_to_kawari() {
        let mut bus = HostBus::new();
        bus.write(OP_2_LO, 0x01);
        assert_eq!(bus.query("kawari.op2"), Some(Value::U16(1)));
        assert_eq!(bus.query("kawari.result"), Some(Value::I16(1)));
        assert_eq!(bus.query("op2"), None);
        for path in bus.query_paths() {
            assert!(bus.query(path).is_some(), "{path}");
        }
    }
}
