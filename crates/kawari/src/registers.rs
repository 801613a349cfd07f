//! Kawari register map.
//!
//! Absolute host addresses for the extension block at $D02F-$D03F, the
//! indexed sub-register space reached through the video memory ports, and
//! the bit flags that go with them. Values match the hardware header.

// ---------------------------------------------------------------------------
// Chip models (CHIP_MODEL sub-register)
// ---------------------------------------------------------------------------

pub const CHIP6567R8: u8 = 0;
pub const CHIP6569R3: u8 = 1;
pub const CHIP6567R56A: u8 = 2;
pub const CHIP6569R1: u8 = 3;

// ---------------------------------------------------------------------------
// Math co-processor
// ---------------------------------------------------------------------------

pub const OP_1_HI: u16 = 0xD02F;
pub const OP_1_LO: u16 = 0xD030;
/// Operand 2 high byte; holds the result high byte after an operation.
pub const OP_2_HI: u16 = 0xD031;
/// Operand 2 low byte; holds the result low byte after an operation.
pub const OP_2_LO: u16 = 0xD032;
/// Write: opcode trigger. Read: status byte.
pub const OPER: u16 = 0xD033;

pub const UMULT: u8 = 0;
pub const UDIV: u8 = 1;
pub const UADD: u8 = 2;
pub const USUB: u8 = 3;
pub const SMULT: u8 = 4;
pub const SDIV: u8 = 5;
pub const SADD: u8 = 6;
pub const SSUB: u8 = 7;

pub const DIVZ: u8 = 4;
pub const OVERFLOW: u8 = 2;
pub const UNDERFLOW: u8 = 1;

// ---------------------------------------------------------------------------
// Extension block ($D034-$D03F)
// ---------------------------------------------------------------------------

pub const SPI_REG: u16 = 0xD034;
pub const VIDEO_MEM_1_IDX: u16 = 0xD035;
pub const VIDEO_MEM_2_IDX: u16 = 0xD036;
pub const VIDEO_MODE1: u16 = 0xD037;
pub const VIDEO_MODE2: u16 = 0xD038;
pub const VIDEO_MEM_1_LO: u16 = 0xD039;
pub const VIDEO_MEM_1_HI: u16 = 0xD03A;
pub const VIDEO_MEM_1_VAL: u16 = 0xD03B;
pub const VIDEO_MEM_2_LO: u16 = 0xD03C;
pub const VIDEO_MEM_2_HI: u16 = 0xD03D;
pub const VIDEO_MEM_2_VAL: u16 = 0xD03E;
pub const VIDEO_MEM_FLAGS: u16 = 0xD03F;

pub const VMEM_FLAG_REGS_BIT: u8 = 32;
pub const VMEM_FLAG_PERSIST_BIT: u8 = 64;

// ---------------------------------------------------------------------------
// Indexed sub-registers (offsets, not host addresses)
// ---------------------------------------------------------------------------

pub const MAGIC_0: u8 = 0x00;
pub const MAGIC_1: u8 = 0x01;
pub const MAGIC_2: u8 = 0x02;
pub const MAGIC_3: u8 = 0x03;
pub const DISPLAY_FLAGS: u8 = 0x04;
pub const EEPROM_BANK: u8 = 0x05;
pub const CHIP_MODEL: u8 = 0x1F;
pub const RGB_START: u8 = 0x40;
pub const BLACK_LEVEL: u8 = 0x80;
pub const BURST_AMPLITUDE: u8 = 0x81;
pub const VERSION: u8 = 0x83;
pub const CURSOR_LO: u8 = 0x85;
pub const CURSOR_HI: u8 = 0x86;
pub const CAP_LO: u8 = 0x87;
pub const CAP_HI: u8 = 0x88;
pub const TIMING_CHANGE: u8 = 0x89;
pub const VARIANT: u8 = 0x90;
pub const LUMA_START: u8 = 0xA0;
pub const PHASE_START: u8 = 0xB0;
pub const AMPLITUDE_START: u8 = 0xC0;

pub const DISPLAY_SHOW_RASTER_LINES_BIT: u8 = 1;
pub const DISPLAY_IS_NATIVE_Y_BIT: u8 = 2;
pub const DISPLAY_IS_NATIVE_X_BIT: u8 = 4;
pub const DISPLAY_ENABLE_CSYNC_BIT: u8 = 8;
pub const DISPLAY_VPOLARITY_BIT: u8 = 16;
pub const DISPLAY_HPOLARITY_BIT: u8 = 32;
pub const DISPLAY_CHIP_INVERT_SWITCH: u8 = 64;

pub const FLASH_BULK_OP: u8 = 128;
pub const FLASH_BULK_WRITE: u8 = 1;
pub const FLASH_BULK_READ: u8 = 2;

// ---------------------------------------------------------------------------
// Chip-relative offsets, as seen by `Kawari::read`/`Kawari::write`
// ---------------------------------------------------------------------------

/// Base of the VIC-II/Kawari register window.
pub const IO_BASE: u16 = 0xD000;

/// Last stock VIC-II register.
pub const REG_LAST_VIC: u8 = 0x2E;
pub const REG_OP_1_HI: u8 = reg(OP_1_HI);
pub const REG_OP_1_LO: u8 = reg(OP_1_LO);
pub const REG_OP_2_HI: u8 = reg(OP_2_HI);
pub const REG_OP_2_LO: u8 = reg(OP_2_LO);
pub const REG_OPER: u8 = reg(OPER);
pub const REG_SPI: u8 = reg(SPI_REG);
pub const REG_VIDEO_MEM_FLAGS: u8 = reg(VIDEO_MEM_FLAGS);

/// Chip-relative register offset for an absolute host address.
#[must_use]
pub const fn reg(addr: u16) -> u8 {
    (addr & 0x3F) as u8
}

/// Named entries for the math and extension registers, in address order.
pub const EXTENSION_REGISTERS: [(&str, u16); 17] = [
    ("OP_1_HI", OP_1_HI),
    ("OP_1_LO", OP_1_LO),
    ("OP_2_HI", OP_2_HI),
    ("OP_2_LO", OP_2_LO),
    ("OPER", OPER),
    ("SPI_REG", SPI_REG),
    ("VIDEO_MEM_1_IDX", VIDEO_MEM_1_IDX),
    ("VIDEO_MEM_2_IDX", VIDEO_MEM_2_IDX),
    ("VIDEO_MODE1", VIDEO_MODE1),
    ("VIDEO_MODE2", VIDEO_MODE2),
    ("VIDEO_MEM_1_LO", VIDEO_MEM_1_LO),
    ("VIDEO_MEM_1_HI", VIDEO_MEM_1_HI),
    ("VIDEO_MEM_1_VAL", VIDEO_MEM_1_VAL),
    ("VIDEO_MEM_2_LO", VIDEO_MEM_2_LO),
    ("VIDEO_MEM_2_HI", VIDEO_MEM_2_HI),
    ("VIDEO_MEM_2_VAL", VIDEO_MEM_2_VAL),
    ("VIDEO_MEM_FLAGS", VIDEO_MEM_FLAGS),
];
