//! Calculation logic for the payroll registry.
//!
//! This module contains salary calculation for a single worker, payout
//! aggregation across all workers, and the two-decimal display of amounts.

mod display;
mod payout;
mod salary;

pub use display::format_amount;
pub use payout::{PayoutReport, WorkerSalary, payout_report, total_payout};
pub use salary::{SalaryBreakdown, SalaryLine, calculate_salary, salary_breakdown};
