//! Math co-processor test suites.
//!
//! Each suite drives the device only through `AluClient`, so it runs the
//! same against the simulated `HostBus` or any other bus with a Kawari.

use emu_core::Bus;
use kawari::{AluClient, Opcode, StatusFlags};
use rand::Rng;

use crate::error::ConfigError;
use crate::harness::{Harness, SuiteReport};

/// Registered suite names, in default run order.
pub const NAMES: &[&str] = &["sadd_1"];

/// Run a suite by name.
pub fn run<B: Bus, R: Rng>(
    name: &str,
    alu: &mut AluClient<'_, B>,
    rng: &mut R,
    random_runs: u32,
) -> Result<SuiteReport, ConfigError> {
    let mut h = Harness::new(name);
    match name {
        "sadd_1" => sadd_1(alu, &mut h, rng, random_runs),
        other => return Err(ConfigError::UnknownSuite(other.to_string())),
    }
    Ok(h.report())
}

/// Fixed SADD cases: (op1, op2, expected overflow, expected underflow).
const SADD_CASES: [(i16, i16, bool, bool); 5] = [
    (32767, 2, true, false),
    (-32767, -2, false, true),
    (8, 3, false, false),
    (-257, 64, false, false),
    (1234, -64, false, false),
];

/// Signed add: fixed boundary cases, then `random_runs` random pairs.
pub fn sadd_1<B: Bus, R: Rng>(
    alu: &mut AluClient<'_, B>,
    h: &mut Harness,
    rng: &mut R,
    random_runs: u32,
) {
    for (a, b, overflow, underflow) in SADD_CASES {
        check_sadd(alu, h, a, b, overflow, underflow);
    }

    for _ in 0..random_runs {
        let a: i16 = rng.random();
        let b: i16 = rng.random();
        let exact = i32::from(a) + i32::from(b);
        check_sadd(
            alu,
            h,
            a,
            b,
            exact > i32::from(i16::MAX),
            exact < i32::from(i16::MIN),
        );
    }
}

/// One SADD: wrapped result, DIVZ clear, and the expected range flags.
fn check_sadd<B: Bus>(
    alu: &mut AluClient<'_, B>,
    h: &mut Harness,
    a: i16,
    b: i16,
    overflow: bool,
    underflow: bool,
) {
    let r = alu.execute(a, b, Opcode::Sadd);

    h.expect_eq(&format!("{a} + {b}"), r.result, a.wrapping_add(b));
    h.expect_eq(
        &format!("{a} + {b} DIVZ"),
        r.flags.bits() & StatusFlags::DIVZ,
        0,
    );
    h.expect_eq(
        &format!("{a} + {b} OVERFLOW"),
        r.flags.bits() & StatusFlags::OVERFLOW,
        if overflow { StatusFlags::OVERFLOW } else { 0 },
    );
    h.expect_eq(
        &format!("{a} + {b} UNDERFLOW"),
        r.flags.bits() & StatusFlags::UNDERFLOW,
        if underflow { StatusFlags::UNDERFLOW } else { 0 },
    );
}
