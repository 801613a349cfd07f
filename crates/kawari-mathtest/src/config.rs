//! Runner configuration, loaded from JSON.
//!
//! Every field is optional in the file:
//!
//! ```json
//! { "random_runs": 500, "seed": 6502, "suites": ["sadd_1"] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::suites;

/// Randomized cases per suite when the config does not say.
pub const DEFAULT_RANDOM_RUNS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MathTestConfig {
    /// Random operand pairs checked by each suite's randomized phase.
    #[serde(default = "MathTestConfig::default_random_runs")]
    pub random_runs: u32,

    /// RNG seed. A fresh seed is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Suites to run, in order.
    #[serde(default = "MathTestConfig::default_suites")]
    pub suites: Vec<String>,
}

impl MathTestConfig {
    fn default_random_runs() -> u32 {
        DEFAULT_RANDOM_RUNS
    }

    fn default_suites() -> Vec<String> {
        suites::NAMES.iter().map(|s| (*s).to_string()).collect()
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Config file (or defaults) with command-line values applied on top.
    ///
    /// Validation runs after the merge, so `--runs` can repair a file that
    /// asks for zero random runs.
    pub fn resolve(
        path: Option<&Path>,
        runs: Option<u32>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_str(&text)?
            }
            None => Self::default(),
        };
        let config = config.with_overrides(runs, seed);
        config.validate()?;
        Ok(config)
    }

    /// Replace `random_runs` and `seed` where a value is given.
    #[must_use]
    pub fn with_overrides(mut self, runs: Option<u32>, seed: Option<u64>) -> Self {
        if let Some(runs) = runs {
            self.random_runs = runs;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_runs == 0 {
            return Err(ConfigError::NoRandomRuns);
        }
        if let Some(name) = self.suites.iter().find(|s| !suites::NAMES.contains(&s.as_str())) {
            return Err(ConfigError::UnknownSuite(name.clone()));
        }
        Ok(())
    }
}

impl Default for MathTestConfig {
    fn default() -> Self {
        Self {
            random_runs: DEFAULT_RANDOM_RUNS,
            seed: None,
            suites: Self::default_suites(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = MathTestConfig::from_json("{}").expect("defaults");
        assert_eq!(config, MathTestConfig::default());
        assert_eq!(config.random_runs, 100);
        assert_eq!(config.suites, vec!["sadd_1".to_string()]);
    }

    #[test]
    fn explicit_fields() {
        let config =
            MathTestConfig::from_json(r#"{"random_runs": 7, "seed": 42, "suites": ["sadd_1"]}"#)
                .expect("valid config");
        assert_eq!(config.random_runs, 7);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn zero_runs_rejected() {
        let err = MathTestConfig::from_json(r#"{"random_runs": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoRandomRuns));
    }

    #[test]
    fn unknown_suite_rejected() {
        let err = MathTestConfig::from_json(r#"{"suites": ["sqrt_1"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSuite(ref s) if s == "sqrt_1"));
    }

    #[test]
    fn unknown_field_is_json_error() {
        let err = MathTestConfig::from_json(r#"{"runs": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = MathTestConfig::from_json(r#"{"random_runs": 7, "seed": 42}"#)
            .expect("valid config")
            .with_overrides(Some(500), Some(6502));
        assert_eq!(config.random_runs, 500);
        assert_eq!(config.seed, Some(6502));
    }

    #[test]
    fn absent_overrides_keep_file_values() {
        let config = MathTestConfig::from_json(r#"{"random_runs": 7, "seed": 42}"#)
            .expect("valid config")
            .with_overrides(None, None);
        assert_eq!(config.random_runs, 7);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn resolve_without_file_uses_defaults() {
        let config = MathTestConfig::resolve(None, None, Some(1)).expect("valid config");
        assert_eq!(config.random_runs, DEFAULT_RANDOM_RUNS);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn resolve_validates_after_merge() {
        assert!(matches!(
            MathTestConfig::resolve(None, Some(0), None),
            Err(ConfigError::NoRandomRuns)
        ));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"random_runs": 0, "seed": 9}}"#).expect("write config");
        let config =
            MathTestConfig::resolve(Some(file.path()), Some(3), None).expect("runs repaired");
        assert_eq!(config.random_runs, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn resolve_missing_file_is_io_error() {
        let err = MathTestConfig::resolve(Some(Path::new("/nonexistent/m.json")), Some(5), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MathTestConfig::load(Path::new("/nonexistent/mathtest.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/mathtest.json"));
    }
}
