//! Memory and I/O bus interface.

/// Memory and I/O bus interface.
///
/// Host code accesses memory and peripherals through this trait. The bus
/// handles address decoding and routing to the appropriate device. This is
/// the peek/poke surface: one byte in, one byte out.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64 KiB RAM bus with no devices attached.
///
/// Useful as a stand-in host when a test only needs memory semantics.
pub struct SimpleBus {
    ram: Box<[u8; 0x10000]>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
        }
    }

    /// Direct view of RAM for test setup and inspection.
    #[must_use]
    pub fn ram(&self) -> &[u8] {
        &self.ram[..]
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_written_byte() {
        let mut bus = SimpleBus::new();
        bus.write(0xC000, 0x5A);
        assert_eq!(bus.read(0xC000), 0x5A);
        assert_eq!(bus.ram()[0xC000], 0x5A);
    }

    #[test]
    fn top_of_memory_addressable() {
        let mut bus = SimpleBus::new();
        bus.write(0xFFFF, 0x42);
        assert_eq!(bus.read(0xFFFF), 0x42);
        assert_eq!(bus.read(0x0000), 0x00);
    }
}
