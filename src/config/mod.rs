//! Configuration loading for the payroll registry.
//!
//! The configuration carries the caller-side policy bounds (maximum rate,
//! quantity and id input) and the HTTP bind address.
//!
//! # Example
//!
//! ```no_run
//! use payroll_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Serving on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_ID, DEFAULT_MAX_QUANTITY, DEFAULT_MAX_RATE, Limits,
    PayrollConfig, ServerConfig,
};
