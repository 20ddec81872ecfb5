//! The payroll registry.
//!
//! [`PayrollRegistry`] owns every work type and worker, assigns their ids,
//! validates work record references and computes salaries.

mod payroll_registry;

pub use payroll_registry::PayrollRegistry;
