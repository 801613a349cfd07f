//! Expectation harness for hardware test suites.
//!
//! A failed expectation is recorded and the suite keeps going, so a
//! single run reports every mismatch instead of stopping at the first.

use std::fmt::{self, Debug};
use std::panic::Location;

use serde::Serialize;
use tracing::warn;

/// One mismatched expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub label: String,
    pub actual: String,
    pub expected: String,
    /// `file:line` of the failing check.
    pub location: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} expected {} got {}",
            self.location, self.label, self.expected, self.actual
        )
    }
}

/// Outcome of one suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub checks: usize,
    pub failures: Vec<Failure>,
    pub passed: bool,
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "PASS" } else { "FAIL" };
        write!(
            f,
            "{verdict} {} ({} checks, {} failures)",
            self.name,
            self.checks,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

/// Collects expectation results for one suite.
pub struct Harness {
    name: String,
    checks: usize,
    failures: Vec<Failure>,
}

impl Harness {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: 0,
            failures: Vec::new(),
        }
    }

    /// Check `actual == expected`, recording a failure otherwise.
    ///
    /// Returns whether the check passed.
    #[track_caller]
    pub fn expect_eq<T: PartialEq + Debug>(&mut self, label: &str, actual: T, expected: T) -> bool {
        self.checks += 1;
        if actual == expected {
            return true;
        }
        let caller = Location::caller();
        let failure = Failure {
            label: label.to_string(),
            actual: format!("{actual:?}"),
            expected: format!("{expected:?}"),
            location: format!("{}:{}", caller.file(), caller.line()),
        };
        warn!(suite = %self.name, %failure, "expectation failed");
        self.failures.push(failure);
        false
    }

    #[must_use]
    pub fn checks(&self) -> usize {
        self.checks
    }

    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    #[must_use]
    pub fn report(self) -> SuiteReport {
        SuiteReport {
            passed: self.failures.is_empty(),
            name: self.name,
            checks: self.checks,
            failures: self.failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_checks_and_keeps_going() {
        let mut h = Harness::new("demo");
        assert!(h.expect_eq("a", 1, 1));
        assert!(!h.expect_eq("b", 2, 3));
        assert!(!h.expect_eq("c", "x", "y"));
        assert_eq!(h.checks(), 3);
        assert_eq!(h.failures().len(), 2);

        let report = h.report();
        assert!(!report.passed);
        assert_eq!(report.failures[0].label, "b");
        assert_eq!(report.failures[0].actual, "2");
        assert_eq!(report.failures[0].expected, "3");
        assert!(report.failures[0].location.contains("harness.rs"));
    }

    #[test]
    fn clean_suite_passes() {
        let mut h = Harness::new("clean");
        h.expect_eq("zero", 0u8, 0u8);
        let report = h.report();
        assert!(report.passed);
        assert_eq!(report.to_string(), "PASS clean (1 checks, 0 failures)");
    }

    #[test]
    fn report_serializes() {
        let mut h = Harness::new("json");
        h.expect_eq("flag", 1u8, 0u8);
        let json = serde_json::to_value(h.report()).expect("serialize");
        assert_eq!(json["name"], "json");
        assert_eq!(json["passed"], false);
        assert_eq!(json["failures"][0]["label"], "flag");
    }
}
