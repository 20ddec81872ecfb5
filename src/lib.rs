//! Payroll registry.
//!
//! This crate tracks workers, categories of billable work ("work types")
//! and per-worker records of completed work, and computes salaries as the
//! sum of rate × quantity. The registry is driven either from an
//! interactive text menu or from a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
