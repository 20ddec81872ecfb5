//! Worker model and embedded work records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Position, WorkTypeId};

/// Identifier of a [`Worker`], assigned by the registry starting at 1.
pub type WorkerId = u32;

/// A quantity of completed work of one work type.
///
/// Records are owned by their worker and have no lifecycle of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The work type this record was validated against when it was added.
    pub work_type_id: WorkTypeId,
    /// Number of units completed (hours, pieces and so on).
    pub quantity: Decimal,
}

/// An employee tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    surname: String,
    position: Position,
    #[serde(default)]
    records: Vec<WorkRecord>,
}

impl Worker {
    pub(crate) fn new(id: WorkerId, surname: String, position: Position) -> Self {
        Self {
            id,
            surname,
            position,
            records: Vec::new(),
        }
    }

    /// Returns the registry-assigned id.
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Returns the worker's surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the worker's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the worker's records in the order they were added.
    pub fn records(&self) -> &[WorkRecord] {
        &self.records
    }

    /// Appends a record. Only the registry calls this, after validating the
    /// work type reference.
    pub(crate) fn push_record(&mut self, record: WorkRecord) {
        self.records.push(record);
    }
}
