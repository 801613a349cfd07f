//! Runs configured suites against a fresh simulated host.

use std::fmt;

use emu_core::Bus;
use kawari::{AluClient, HostBus};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::config::MathTestConfig;
use crate::error::ConfigError;
use crate::harness::SuiteReport;
use crate::suites;

/// Process exit status when any suite recorded a failure.
pub const EXIT_SUITE_FAILED: i32 = 1;
/// Process exit status when the config could not be loaded or validated.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Seed actually used, so a failing run can be replayed.
    pub seed: u64,
    pub random_runs: u32,
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.suites.iter().all(|s| s.passed)
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.suites.iter().map(|s| s.failures.len()).sum()
    }

    /// `0` on a clean run, [`EXIT_SUITE_FAILED`] otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { EXIT_SUITE_FAILED }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed {} / {} random runs", self.seed, self.random_runs)?;
        for suite in &self.suites {
            writeln!(f, "{suite}")?;
        }
        let verdict = if self.passed() { "PASSED" } else { "FAILED" };
        write!(f, "{verdict}: {} failures", self.failure_count())
    }
}

/// Run every configured suite on a new `HostBus`.
pub fn run(config: &MathTestConfig) -> Result<RunReport, ConfigError> {
    let mut bus = HostBus::new();
    run_on(&mut bus, config)
}

/// Run every configured suite on the given bus.
pub fn run_on<B: Bus>(bus: &mut B, config: &MathTestConfig) -> Result<RunReport, ConfigError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut alu = AluClient::new(bus);

    let mut reports = Vec::with_capacity(config.suites.len());
    for name in &config.suites {
        info!(suite = %name, seed, runs = config.random_runs, "running suite");
        let report = suites::run(name, &mut alu, &mut rng, config.random_runs)?;
        info!(suite = %name, checks = report.checks, failures = report.failures.len(), "suite done");
        reports.push(report);
    }

    Ok(RunReport {
        seed,
        random_runs: config.random_runs,
        suites: reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Harness;

    #[test]
    fn default_config_passes() {
        let config = MathTestConfig {
            seed: Some(0xC64),
            ..MathTestConfig::default()
        };
        let report = run(&config).expect("valid config");
        assert!(report.passed(), "{report}");
        assert_eq!(report.seed, 0xC64);
        assert_eq!(report.suites.len(), 1);
        assert!(report.to_string().ends_with("PASSED: 0 failures"));
    }

    #[test]
    fn exit_code_follows_verdict() {
        let mut report = run(&MathTestConfig {
            random_runs: 1,
            seed: Some(5),
            ..MathTestConfig::default()
        })
        .expect("valid config");
        assert_eq!(report.exit_code(), 0);

        let mut h = Harness::new("sadd_1");
        h.expect_eq("1 + 1", 3, 2);
        report.suites.push(h.report());
        assert_eq!(report.exit_code(), EXIT_SUITE_FAILED);
        assert_ne!(EXIT_SUITE_FAILED, EXIT_CONFIG_ERROR);
    }

    #[test]
    fn seed_drawn_when_absent() {
        let config = MathTestConfig {
            random_runs: 1,
            ..MathTestConfig::default()
        };
        assert!(run(&config).expect("valid config").passed());
    }

    #[test]
    fn invalid_config_rejected_before_running() {
        let config = MathTestConfig {
            random_runs: 0,
            ..MathTestConfig::default()
        };
        let mut bus = HostBus::new();
        assert!(matches!(
            run_on(&mut bus, &config),
            Err(ConfigError::NoRandomRuns)
        ));
        assert_eq!(bus.kawari.operations(), 0);
    }
}
