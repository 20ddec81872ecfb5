//! Configuration types for the payroll registry.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file is valid.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default upper bound on a work type's rate.
pub const DEFAULT_MAX_RATE: u32 = 100_000;

/// Default upper bound on a single record's quantity.
pub const DEFAULT_MAX_QUANTITY: u32 = 10_000;

/// Default upper bound on ids typed into the console.
pub const DEFAULT_MAX_ID: u32 = 1_000_000;

/// Default address for the HTTP server.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Policy bounds applied on top of the registry's own positivity checks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted rate for a new work type.
    pub max_rate: Decimal,
    /// Largest accepted quantity for a new work record.
    pub max_quantity: Decimal,
    /// Largest id the console accepts as input.
    pub max_id: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rate: Decimal::from(DEFAULT_MAX_RATE),
            max_quantity: Decimal::from(DEFAULT_MAX_QUANTITY),
            max_id: DEFAULT_MAX_ID,
        }
    }
}

impl Limits {
    /// Checks that every bound admits at least one valid input.
    ///
    /// The console reads quantities and ids as whole numbers, so their
    /// bounds must be at least 1.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_rate <= Decimal::ZERO {
            return Err(format!(
                "limits.max_rate must be greater than 0, got {}",
                self.max_rate
            ));
        }
        if self.max_quantity < Decimal::ONE {
            return Err(format!(
                "limits.max_quantity must be at least 1, got {}",
                self.max_quantity
            ));
        }
        if self.max_id < 1 {
            return Err("limits.max_id must be at least 1, got 0".to_string());
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// The complete configuration loaded from `payroll.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Input bounds.
    pub limits: Limits,
    /// HTTP server settings.
    pub server: ServerConfig,
}
