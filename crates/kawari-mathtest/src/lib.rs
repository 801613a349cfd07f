//! Math co-processor test suite and runner for the Kawari.
//!
//! Suites poke operands and opcodes through `kawari::AluClient`, then
//! compare results and status bits against exact integer arithmetic. A
//! mismatch is recorded and the suite carries on.

pub mod config;
pub mod error;
pub mod exec;
pub mod harness;
pub mod runner;
pub mod suites;

pub use config::MathTestConfig;
pub use error::{ConfigError, OperandError};
pub use harness::{Failure, Harness, SuiteReport};
pub use runner::{EXIT_CONFIG_ERROR, EXIT_SUITE_FAILED, RunReport, run, run_on};
