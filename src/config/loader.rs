//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::LeavePolicy;

/// File name of the policy inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Carry-over cap and notification thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Carry-over cap: {}", loader.policy().carry_over.max_carry_over_days);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing
    /// - the file contains invalid YAML or mistyped fields
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;
        debug!(path = %policy_path.display(), "Loaded leave policy");
        Ok(Self { policy })
    }

    /// Parses a policy from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("carry_over:\n  max_carry_over_days: 10\n").unwrap();
    /// assert_eq!(loader.policy().carry_over.max_carry_over_days, 10);
    /// assert_eq!(loader.policy().notifications.expiring_threshold_days, 105);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let policy = Self::parse_yaml(content, "<inline>")?;
        Ok(Self { policy })
    }

    /// Wraps an already-built policy.
    pub fn from_policy(policy: LeavePolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}
