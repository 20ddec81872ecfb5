//! Salary calculation.
//!
//! A worker's salary is the sum of rate × quantity over their work records,
//! with each rate read from the current set of work types at calculation
//! time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{WorkRecord, WorkType, WorkTypeId, Worker, WorkerId};

/// One resolved record's contribution to a salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryLine {
    /// The work type the record refers to.
    pub work_type_id: WorkTypeId,
    /// The name of the work type.
    pub work_type_name: String,
    /// The per-unit rate used.
    pub rate: Decimal,
    /// The recorded quantity.
    pub quantity: Decimal,
    /// `rate * quantity`.
    pub amount: Decimal,
}

/// A salary together with the lines it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The worker the salary belongs to.
    pub worker_id: WorkerId,
    /// The worker's surname.
    pub surname: String,
    /// One line per resolved record, in record order.
    pub lines: Vec<SalaryLine>,
    /// Work type ids of records whose work type could not be resolved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<WorkTypeId>,
    /// Sum of all line amounts.
    pub total: Decimal,
}

fn resolve<'a>(work_types: &'a [WorkType], record: &WorkRecord) -> Option<&'a WorkType> {
    work_types.iter().find(|wt| wt.id() == record.work_type_id)
}

/// `rate * quantity` for one record, saturating on overflow.
fn contribution(work_type: &WorkType, record: &WorkRecord) -> Decimal {
    work_type.rate().saturating_mul(record.quantity)
}

/// Calculates a worker's salary against the given work types.
///
/// Records whose work type does not resolve contribute nothing. The
/// registry never lets such a record in, so hitting that path is logged.
/// Arithmetic saturates at `Decimal::MAX` instead of panicking; the registry
/// rejects any record that would push a salary or the payout that far.
///
/// # Examples
///
/// ```
/// use payroll_registry::models::Position;
/// use payroll_registry::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// let hour = registry.add_work_type("Hour", Decimal::from(100)).unwrap();
/// let smith = registry.add_worker("Smith", Position::Employee).unwrap();
/// registry.add_work_record(smith, hour, Decimal::from(5)).unwrap();
///
/// let worker = registry.find_worker(smith).unwrap();
/// assert_eq!(registry.calculate_salary(worker), Decimal::from(500));
/// ```
pub fn calculate_salary(worker: &Worker, work_types: &[WorkType]) -> Decimal {
    let mut total = Decimal::ZERO;
    for record in worker.records() {
        match resolve(work_types, record) {
            Some(work_type) => {
                total = total.saturating_add(contribution(work_type, record));
            }
            None => warn!(
                worker_id = worker.id(),
                work_type_id = record.work_type_id,
                "Skipping record with unresolved work type"
            ),
        }
    }
    total
}

/// Builds the per-record breakdown of a worker's salary.
///
/// The breakdown total always equals [`calculate_salary`] for the same
/// inputs.
pub fn salary_breakdown(worker: &Worker, work_types: &[WorkType]) -> SalaryBreakdown {
    let mut lines = Vec::with_capacity(worker.records().len());
    let mut skipped = Vec::new();

    for record in worker.records() {
        match resolve(work_types, record) {
            Some(work_type) => lines.push(SalaryLine {
                work_type_id: work_type.id(),
                work_type_name: work_type.name().to_string(),
                rate: work_type.rate(),
                quantity: record.quantity,
                amount: contribution(work_type, record),
            }),
            None => {
                warn!(
                    worker_id = worker.id(),
                    work_type_id = record.work_type_id,
                    "Skipping record with unresolved work type"
                );
                skipped.push(record.work_type_id);
            }
        }
    }

    let total = lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.amount));

    SalaryBreakdown {
        worker_id: worker.id(),
        surname: worker.surname().to_string(),
        lines,
        skipped,
        total,
    }
}
