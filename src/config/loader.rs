//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};

use super::types::{Limits, PayrollConfig, ServerConfig};

/// Default location of the configuration file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # File format
///
/// ```yaml
/// limits:
///   max_rate: 100000
///   max_quantity: 10000
///   max_id: 1000000
/// server:
///   bind_address: "127.0.0.1:3000"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Max rate: {}", loader.limits().max_rate);
/// # Ok::<(), payroll_registry::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`PayrollConfig`] or
    /// its limits admit no input (for example `max_quantity` below 1).
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        info!(path = %path_str, "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Loads configuration from `path`, falling back to the defaults when
    /// the file is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(loader) => loader,
            Err(err) => {
                warn!(error = %err, "Using default payroll configuration");
                Self::default()
            }
        }
    }

    fn parse(content: &str) -> Result<PayrollConfig, String> {
        // An empty file deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }
        let config: PayrollConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured input bounds.
    pub fn limits(&self) -> &Limits {
        &self.config.limits
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}
