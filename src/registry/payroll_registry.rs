//! Registry of work types and workers.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{self, PayoutReport, SalaryBreakdown};
use crate::config::Limits;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Position, WorkRecord, WorkType, WorkTypeId, Worker, WorkerId};

/// In-memory store of work types, workers and their work records.
///
/// Ids start at 1 in each collection, increase by one per insertion and
/// are never reused. Nothing is ever removed, so a record's work type
/// reference stays valid once it has been checked.
///
/// The registry is not `Clone`. A process builds one and hands it to the
/// front-end that drives it.
///
/// # Example
///
/// ```
/// use payroll_registry::models::Position;
/// use payroll_registry::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// let hour = registry.add_work_type("Hour", Decimal::from(100))?;
/// let smith = registry.add_worker("Smith", Position::Employee)?;
/// registry.add_work_record(smith, hour, Decimal::from(5))?;
///
/// assert_eq!(registry.salary_by_surname("Smith")?, Decimal::from(500));
/// assert_eq!(registry.total_payout(), Decimal::from(500));
/// # Ok::<(), payroll_registry::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct PayrollRegistry {
    work_types: Vec<WorkType>,
    workers: Vec<Worker>,
    next_work_type_id: WorkTypeId,
    next_worker_id: WorkerId,
    limits: Option<Limits>,
}

impl Default for PayrollRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollRegistry {
    /// Creates an empty registry that only enforces the positivity and
    /// non-empty constraints.
    pub fn new() -> Self {
        Self {
            work_types: Vec::new(),
            workers: Vec::new(),
            next_work_type_id: 1,
            next_worker_id: 1,
            limits: None,
        }
    }

    /// Creates an empty registry that additionally rejects rates and
    /// quantities above the given limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits: Some(limits),
            ..Self::new()
        }
    }

    /// Returns the limits this registry enforces, if any.
    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }

    /// Adds a work type and returns its id.
    ///
    /// Fails with `InvalidInput` if the name is empty, the rate is not
    /// positive, or the rate exceeds the configured maximum.
    pub fn add_work_type(&mut self, name: &str, rate: Decimal) -> PayrollResult<WorkTypeId> {
        if name.is_empty() {
            return Err(PayrollError::invalid_input("name", "must not be empty"));
        }
        if rate <= Decimal::ZERO {
            return Err(PayrollError::invalid_input(
                "rate",
                "must be greater than zero",
            ));
        }
        if let Some(limits) = &self.limits {
            if rate > limits.max_rate {
                return Err(PayrollError::invalid_input(
                    "rate",
                    format!("must not exceed {}", limits.max_rate),
                ));
            }
        }

        let id = self.next_work_type_id;
        self.next_work_type_id += 1;
        self.work_types
            .push(WorkType::new(id, name.to_string(), rate));

        info!(work_type_id = id, work_type_name = name, rate = %rate, "Added work type");
        Ok(id)
    }

    /// Looks up a work type by id.
    pub fn find_work_type(&self, id: WorkTypeId) -> PayrollResult<&WorkType> {
        self.work_types
            .iter()
            .find(|wt| wt.id() == id)
            .ok_or(PayrollError::WorkTypeNotFound { id })
    }

    /// Returns all work types in the order they were added.
    pub fn work_types(&self) -> &[WorkType] {
        &self.work_types
    }

    /// Adds a worker and returns its id.
    ///
    /// Fails with `InvalidInput` if the surname is empty.
    pub fn add_worker(&mut self, surname: &str, position: Position) -> PayrollResult<WorkerId> {
        if surname.is_empty() {
            return Err(PayrollError::invalid_input("surname", "must not be empty"));
        }

        let id = self.next_worker_id;
        self.next_worker_id += 1;
        self.workers
            .push(Worker::new(id, surname.to_string(), position));

        info!(worker_id = id, surname, position = %position, "Added worker");
        Ok(id)
    }

    /// Looks up a worker by id.
    pub fn find_worker(&self, id: WorkerId) -> PayrollResult<&Worker> {
        self.workers
            .iter()
            .find(|w| w.id() == id)
            .ok_or(PayrollError::WorkerNotFound { id })
    }

    /// Looks up the first worker, in insertion order, whose surname equals
    /// `surname` exactly. No trimming or case folding is applied.
    pub fn find_worker_by_surname(&self, surname: &str) -> PayrollResult<&Worker> {
        self.workers
            .iter()
            .find(|w| w.surname() == surname)
            .ok_or_else(|| PayrollError::SurnameNotFound {
                surname: surname.to_string(),
            })
    }

    /// Returns all workers in the order they were added.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Attaches a work record to a worker.
    ///
    /// The worker is resolved first, then the work type, then the quantity
    /// is checked, including that the worker's salary and the total payout
    /// stay representable. Any failure leaves the registry unchanged.
    pub fn add_work_record(
        &mut self,
        worker_id: WorkerId,
        work_type_id: WorkTypeId,
        quantity: Decimal,
    ) -> PayrollResult<()> {
        let index = self
            .workers
            .iter()
            .position(|w| w.id() == worker_id)
            .ok_or(PayrollError::WorkerNotFound { id: worker_id })?;
        let rate = self.find_work_type(work_type_id)?.rate();

        if quantity <= Decimal::ZERO {
            return Err(PayrollError::invalid_input(
                "quantity",
                "must be greater than zero",
            ));
        }
        if let Some(limits) = &self.limits {
            if quantity > limits.max_quantity {
                return Err(PayrollError::invalid_input(
                    "quantity",
                    format!("must not exceed {}", limits.max_quantity),
                ));
            }
        }

        // Salaries and the payout must stay representable once the record
        // is in, so the calculation paths never hit overflow.
        let amount = rate.checked_mul(quantity);
        let salary = amount
            .and_then(|amount| self.calculate_salary(&self.workers[index]).checked_add(amount));
        let payout = amount.and_then(|amount| self.total_payout().checked_add(amount));
        if salary.is_none() || payout.is_none() {
            return Err(PayrollError::invalid_input(
                "quantity",
                "rate multiplied by quantity exceeds the representable payroll amount",
            ));
        }

        self.workers[index].push_record(WorkRecord {
            work_type_id,
            quantity,
        });

        info!(
            worker_id,
            work_type_id,
            quantity = %quantity,
            "Added work record"
        );
        Ok(())
    }

    /// Calculates a worker's salary from the current work types.
    pub fn calculate_salary(&self, worker: &Worker) -> Decimal {
        calculation::calculate_salary(worker, &self.work_types)
    }

    /// Calculates the salary of the first worker with the given surname.
    pub fn salary_by_surname(&self, surname: &str) -> PayrollResult<Decimal> {
        let worker = self.find_worker_by_surname(surname)?;
        let salary = self.calculate_salary(worker);
        debug!(worker_id = worker.id(), salary = %salary, "Calculated salary");
        Ok(salary)
    }

    /// Returns the per-record breakdown of a worker's salary.
    pub fn salary_breakdown(&self, worker: &Worker) -> SalaryBreakdown {
        calculation::salary_breakdown(worker, &self.work_types)
    }

    /// Sums the salaries of all workers.
    pub fn total_payout(&self) -> Decimal {
        calculation::total_payout(&self.workers, &self.work_types)
    }

    /// Builds a report of every worker's salary and their total.
    pub fn payout_report(&self) -> PayoutReport {
        calculation::payout_report(&self.workers, &self.work_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_work_type_ids_start_at_one_and_increase() {
        let mut registry = PayrollRegistry::new();
        assert_eq!(registry.add_work_type("Hour", dec(100)).unwrap(), 1);
        assert_eq!(registry.add_work_type("Piece", dec(5)).unwrap(), 2);
        assert_eq!(registry.add_work_type("Report", dec(40)).unwrap(), 3);
    }

    #[test]
    fn test_worker_ids_are_independent_of_work_type_ids() {
        let mut registry = PayrollRegistry::new();
        registry.add_work_type("Hour", dec(100)).unwrap();
        registry.add_work_type("Piece", dec(5)).unwrap();
        assert_eq!(registry.add_worker("Smith", Position::Employee).unwrap(), 1);
        assert_eq!(registry.add_worker("Jones", Position::Manager).unwrap(), 2);
    }

    #[test]
    fn test_add_work_type_rejects_empty_name() {
        let mut registry = PayrollRegistry::new();
        let err = registry.add_work_type("", dec(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(registry.work_types().is_empty());
    }

    #[test]
    fn test_add_work_type_rejects_non_positive_rate() {
        let mut registry = PayrollRegistry::new();
        assert!(registry.add_work_type("Hour", Decimal::ZERO).is_err());
        assert!(registry.add_work_type("Hour", dec(-5)).is_err());
        assert!(registry.work_types().is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_an_id() {
        let mut registry = PayrollRegistry::new();
        assert!(registry.add_work_type("", dec(1)).is_err());
        assert_eq!(registry.add_work_type("Hour", dec(1)).unwrap(), 1);
        assert!(registry.add_worker("", Position::Employee).is_err());
        assert_eq!(registry.add_worker("Smith", Position::Employee).unwrap(), 1);
    }

    #[test]
    fn test_unbounded_registry_accepts_large_rate() {
        let mut registry = PayrollRegistry::new();
        assert!(registry.add_work_type("Audit", dec(1_000_000)).is_ok());
    }

    #[test]
    fn test_limits_cap_rate() {
        let mut registry = PayrollRegistry::with_limits(Limits::default());
        assert!(registry.add_work_type("Max", dec(100_000)).is_ok());
        let err = registry.add_work_type("Over", dec(100_001)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(registry.work_types().len(), 1);
    }

    #[test]
    fn test_limits_cap_quantity() {
        let mut registry = PayrollRegistry::with_limits(Limits::default());
        let hour = registry.add_work_type("Hour", dec(1)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        assert!(registry.add_work_record(smith, hour, dec(10_000)).is_ok());
        let err = registry.add_work_record(smith, hour, dec(10_001)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(registry.find_worker(smith).unwrap().records().len(), 1);
    }

    #[test]
    fn test_find_work_type() {
        let mut registry = PayrollRegistry::new();
        let id = registry.add_work_type("Hour", Decimal::new(1250, 2)).unwrap();
        let work_type = registry.find_work_type(id).unwrap();
        assert_eq!(work_type.name(), "Hour");
        assert_eq!(work_type.rate(), Decimal::new(1250, 2));

        let err = registry.find_work_type(2).unwrap_err();
        assert!(matches!(err, PayrollError::WorkTypeNotFound { id: 2 }));
    }

    #[test]
    fn test_find_worker() {
        let mut registry = PayrollRegistry::new();
        let id = registry.add_worker("Smith", Position::Accountant).unwrap();
        assert_eq!(registry.find_worker(id).unwrap().surname(), "Smith");
        assert!(matches!(
            registry.find_worker(0).unwrap_err(),
            PayrollError::WorkerNotFound { id: 0 }
        ));
    }

    #[test]
    fn test_find_worker_by_surname_returns_first_match() {
        let mut registry = PayrollRegistry::new();
        let first = registry.add_worker("Smith", Position::Employee).unwrap();
        registry.add_worker("Smith", Position::Manager).unwrap();
        assert_eq!(registry.find_worker_by_surname("Smith").unwrap().id(), first);
    }

    #[test]
    fn test_find_worker_by_surname_is_exact() {
        let mut registry = PayrollRegistry::new();
        registry.add_worker("Smith", Position::Employee).unwrap();
        assert!(registry.find_worker_by_surname("smith").is_err());
        assert!(registry.find_worker_by_surname(" Smith").is_err());
        let err = registry.find_worker_by_surname("Jones").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_add_work_record_unknown_worker() {
        let mut registry = PayrollRegistry::new();
        registry.add_work_type("Hour", dec(100)).unwrap();
        let err = registry.add_work_record(999, 1, dec(1)).unwrap_err();
        assert!(matches!(err, PayrollError::WorkerNotFound { id: 999 }));
    }

    #[test]
    fn test_add_work_record_unknown_work_type() {
        let mut registry = PayrollRegistry::new();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        let err = registry.add_work_record(smith, 5, dec(1)).unwrap_err();
        assert!(matches!(err, PayrollError::WorkTypeNotFound { id: 5 }));
        assert!(registry.find_worker(smith).unwrap().records().is_empty());
    }

    #[test]
    fn test_add_work_record_worker_checked_before_work_type() {
        let mut registry = PayrollRegistry::new();
        let err = registry.add_work_record(1, 1, dec(1)).unwrap_err();
        assert!(matches!(err, PayrollError::WorkerNotFound { .. }));
    }

    #[test]
    fn test_add_work_record_rejects_non_positive_quantity() {
        let mut registry = PayrollRegistry::new();
        let hour = registry.add_work_type("Hour", dec(100)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        let err = registry
            .add_work_record(smith, hour, Decimal::ZERO)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(registry.find_worker(smith).unwrap().records().is_empty());
    }

    #[test]
    fn test_add_work_record_appends() {
        let mut registry = PayrollRegistry::new();
        let hour = registry.add_work_type("Hour", dec(100)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        registry.add_work_record(smith, hour, dec(5)).unwrap();
        registry.add_work_record(smith, hour, dec(2)).unwrap();

        let records = registry.find_worker(smith).unwrap().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quantity, dec(5));
        assert_eq!(records[1].quantity, dec(2));
    }

    #[test]
    fn test_new_work_type_does_not_change_existing_salary() {
        let mut registry = PayrollRegistry::new();
        let hour = registry.add_work_type("Hour", dec(100)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        registry.add_work_record(smith, hour, dec(5)).unwrap();
        let before = registry.salary_by_surname("Smith").unwrap();

        registry.add_work_type("Overtime", dec(250)).unwrap();

        assert_eq!(registry.salary_by_surname("Smith").unwrap(), before);
        assert_eq!(registry.find_work_type(hour).unwrap().rate(), dec(100));
    }

    #[test]
    fn test_salary_skips_dangling_reference() {
        let mut registry = PayrollRegistry::new();
        let hour = registry.add_work_type("Hour", dec(100)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        registry.add_work_record(smith, hour, dec(1)).unwrap();
        // Bypass validation to plant a record the public API cannot create.
        registry.workers[0].push_record(WorkRecord {
            work_type_id: 42,
            quantity: dec(10),
        });

        let worker = registry.find_worker(smith).unwrap();
        assert_eq!(registry.calculate_salary(worker), dec(100));
        assert_eq!(registry.salary_breakdown(worker).skipped, vec![42]);
    }

    #[test]
    fn test_max_rate_times_max_quantity_over_many_records() {
        let limits = Limits::default();
        let mut registry = PayrollRegistry::with_limits(limits.clone());
        let top = registry.add_work_type("Top", limits.max_rate).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        let jones = registry.add_worker("Jones", Position::Manager).unwrap();
        for _ in 0..1000 {
            registry
                .add_work_record(smith, top, limits.max_quantity)
                .unwrap();
            registry
                .add_work_record(jones, top, limits.max_quantity)
                .unwrap();
        }

        // 100000 * 10000 * 1000 per worker
        let expected = dec(1_000_000_000_000);
        assert_eq!(registry.salary_by_surname("Smith").unwrap(), expected);
        assert_eq!(registry.salary_by_surname("Jones").unwrap(), expected);
        assert_eq!(registry.total_payout(), expected * dec(2));
    }

    #[test]
    fn test_record_with_unrepresentable_amount_is_rejected() {
        let mut registry = PayrollRegistry::new();
        let big = registry
            .add_work_type("Big", Decimal::from_i128_with_scale(10_i128.pow(22), 0))
            .unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();

        let err = registry
            .add_work_record(smith, big, dec(10_000_000))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(registry.find_worker(smith).unwrap().records().is_empty());
        assert_eq!(registry.total_payout(), Decimal::ZERO);
    }

    #[test]
    fn test_record_overflowing_accumulated_salary_is_rejected() {
        let mut registry = PayrollRegistry::new();
        let max = registry.add_work_type("Max", Decimal::MAX).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        registry.add_work_record(smith, max, Decimal::ONE).unwrap();

        let err = registry
            .add_work_record(smith, max, Decimal::ONE)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(registry.find_worker(smith).unwrap().records().len(), 1);
        assert_eq!(registry.total_payout(), Decimal::MAX);
    }

    #[test]
    fn test_record_overflowing_total_payout_is_rejected() {
        let mut registry = PayrollRegistry::new();
        let max = registry.add_work_type("Max", Decimal::MAX).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        let jones = registry.add_worker("Jones", Position::Manager).unwrap();
        registry.add_work_record(smith, max, Decimal::ONE).unwrap();

        let err = registry
            .add_work_record(jones, max, Decimal::ONE)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(registry.find_worker(jones).unwrap().records().is_empty());
        assert_eq!(registry.payout_report().total, Decimal::MAX);
    }

    #[test]
    fn test_salary_by_surname_unknown() {
        let registry = PayrollRegistry::new();
        let err = registry.salary_by_surname("Smith").unwrap_err();
        assert!(matches!(err, PayrollError::SurnameNotFound { .. }));
    }

    #[test]
    fn test_total_payout_empty_registry() {
        let registry = PayrollRegistry::new();
        assert_eq!(registry.total_payout(), Decimal::ZERO);
    }

    #[test]
    fn test_total_payout_sums_workers() {
        let mut registry = PayrollRegistry::new();
        let hour = registry.add_work_type("Hour", dec(100)).unwrap();
        let piece = registry.add_work_type("Piece", Decimal::new(150, 2)).unwrap();
        let smith = registry.add_worker("Smith", Position::Employee).unwrap();
        let jones = registry.add_worker("Jones", Position::Manager).unwrap();
        registry.add_work_record(smith, hour, dec(5)).unwrap();
        registry.add_work_record(jones, piece, dec(10)).unwrap();
        registry.add_work_record(jones, hour, dec(1)).unwrap();

        // 500 + 15 + 100
        assert_eq!(registry.total_payout(), dec(615));
        assert_eq!(registry.payout_report().total, dec(615));
    }
}
