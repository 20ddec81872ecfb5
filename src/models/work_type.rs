//! Work type model.
//!
//! A work type is a billable category of work with a fixed per-unit rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a [`WorkType`], assigned by the registry starting at 1.
pub type WorkTypeId = u32;

/// A billable category of work.
///
/// Work types are immutable once created: the fields are only readable
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkType {
    id: WorkTypeId,
    name: String,
    rate: Decimal,
}

impl WorkType {
    pub(crate) fn new(id: WorkTypeId, name: String, rate: Decimal) -> Self {
        Self { id, name, rate }
    }

    /// Returns the registry-assigned id.
    pub fn id(&self) -> WorkTypeId {
        self.id
    }

    /// Returns the name of the work type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payment per unit of work.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}
