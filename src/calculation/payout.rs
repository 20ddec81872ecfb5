//! Payout aggregation across all workers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Position, WorkType, Worker, WorkerId};

use super::calculate_salary;

/// One worker's entry in a [`PayoutReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSalary {
    /// The worker's id.
    pub worker_id: WorkerId,
    /// The worker's surname.
    pub surname: String,
    /// The worker's position.
    pub position: Position,
    /// The worker's current salary.
    pub salary: Decimal,
}

/// Salaries of every worker plus their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// One entry per worker, in insertion order.
    pub workers: Vec<WorkerSalary>,
    /// Sum of all salaries.
    pub total: Decimal,
}

/// Sums the salaries of all workers, saturating at `Decimal::MAX`.
pub fn total_payout(workers: &[Worker], work_types: &[WorkType]) -> Decimal {
    workers
        .iter()
        .map(|worker| calculate_salary(worker, work_types))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Builds a [`PayoutReport`] for all workers.
pub fn payout_report(workers: &[Worker], work_types: &[WorkType]) -> PayoutReport {
    let entries: Vec<WorkerSalary> = workers
        .iter()
        .map(|worker| WorkerSalary {
            worker_id: worker.id(),
            surname: worker.surname().to_string(),
            position: worker.position(),
            salary: calculate_salary(worker, work_types),
        })
        .collect();
    let total = entries
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc.saturating_add(entry.salary));

    PayoutReport {
        generated_at: Utc::now(),
        workers: entries,
        total,
    }
}
