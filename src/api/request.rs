//! Request types for the payroll HTTP API.
//!
//! Strings arrive untrimmed; handlers trim them before calling the
//! registry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Position, WorkTypeId};

/// Request body for `POST /work-types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkTypeRequest {
    /// Name of the work type.
    pub name: String,
    /// Payment per unit.
    pub rate: Decimal,
}

/// Request body for `POST /workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkerRequest {
    /// Surname of the worker.
    pub surname: String,
    /// Position of the worker.
    pub position: Position,
}

/// Request body for `POST /workers/:id/records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkRecordRequest {
    /// The work type that was performed.
    pub work_type_id: WorkTypeId,
    /// Number of completed units.
    pub quantity: Decimal,
}

/// Query string for `GET /workers/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurnameQuery {
    /// Surname to search for.
    pub surname: String,
}
