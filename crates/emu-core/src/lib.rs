//! Bus and observability traits for memory-mapped device simulation.
//!
//! Host code talks to devices only through byte-wide reads and writes on
//! a 16-bit address space. Devices expose their internal state through
//! `Observable` so tests and tools can inspect them without side effects.

mod bus;
mod observable;

pub use bus::{Bus, SimpleBus};
pub use observable::{Observable, Value};
