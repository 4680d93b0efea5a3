//! Configuration for seeding runs.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_CREDENTIALS_PATH: &str = "service-account.json";

/// Project used against the emulator when none is configured.
pub const DEFAULT_EMULATOR_PROJECT: &str = "demo-leo-connect";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// What to do when a post names an author or club that was not seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingReferencePolicy {
    /// Substitute the first user / an "Unknown Club" label without comment.
    #[default]
    Fallback,
    /// Substitute like `Fallback`, but log a warning.
    Warn,
    /// Abort the run.
    Error,
}

impl FromStr for MissingReferencePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Service-account key file.
    pub credentials_path: PathBuf,

    /// Overrides the project named in the key file.
    pub project_id: Option<String>,

    /// Firestore emulator `host:port`; when set no credentials are read.
    pub emulator_host: Option<String>,

    /// Handling of unresolved author/club references in posts.
    pub missing_reference: MissingReferencePolicy,

    /// Seed for the RNG behind mock counters, likes, and comments.
    pub rng_seed: Option<u64>,

    /// Write to an in-memory store instead of Firestore.
    pub dry_run: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            project_id: None,
            emulator_host: None,
            missing_reference: MissingReferencePolicy::default(),
            rng_seed: None,
            dry_run: false,
        }
    }
}

impl SeedConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup("SEED_CREDENTIALS")) {
            config.credentials_path = PathBuf::from(path);
        }
        config.project_id = non_empty(lookup("FIREBASE_PROJECT_ID"));
        config.emulator_host = non_empty(lookup("FIRESTORE_EMULATOR_HOST"));

        if let Some(raw) = non_empty(lookup("SEED_MISSING_REFERENCE")) {
            config.missing_reference =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    var: "SEED_MISSING_REFERENCE",
                    value: raw.clone(),
                    expected: "fallback, warn, or error",
                })?;
        }

        if let Some(raw) = non_empty(lookup("SEED_RNG_SEED")) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "SEED_RNG_SEED",
                value: raw.clone(),
                expected: "an unsigned integer",
            })?;
            config.rng_seed = Some(seed);
        }

        if let Some(raw) = non_empty(lookup("SEED_DRY_RUN")) {
            config.dry_run = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                var: "SEED_DRY_RUN",
                value: raw.clone(),
                expected: "true or false",
            })?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<SeedConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SeedConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            config.credentials_path,
            PathBuf::from(DEFAULT_CREDENTIALS_PATH)
        );
        assert_eq!(config.missing_reference, MissingReferencePolicy::Fallback);
        assert!(config.project_id.is_none());
        assert!(config.emulator_host.is_none());
        assert!(config.rng_seed.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SEED_CREDENTIALS", "/secrets/key.json"),
            ("FIREBASE_PROJECT_ID", "leo-connect-prod"),
            ("FIRESTORE_EMULATOR_HOST", "localhost:8080"),
            ("SEED_MISSING_REFERENCE", "Warn"),
            ("SEED_RNG_SEED", "12345"),
            ("SEED_DRY_RUN", "yes"),
        ])
        .unwrap();

        assert_eq!(config.credentials_path, PathBuf::from("/secrets/key.json"));
        assert_eq!(config.project_id.as_deref(), Some("leo-connect-prod"));
        assert_eq!(config.emulator_host.as_deref(), Some("localhost:8080"));
        assert_eq!(config.missing_reference, MissingReferencePolicy::Warn);
        assert_eq!(config.rng_seed, Some(12345));
        assert!(config.dry_run);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[("FIREBASE_PROJECT_ID", "  "), ("SEED_RNG_SEED", "")]).unwrap();
        assert!(config.project_id.is_none());
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("SEED_MISSING_REFERENCE", "ignore")]).is_err());
        assert!(config_from(&[("SEED_RNG_SEED", "-4")]).is_err());
        assert!(config_from(&[("SEED_DRY_RUN", "maybe")]).is_err());
    }
}
