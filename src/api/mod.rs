//! HTTP API for the payroll registry.
//!
//! This module exposes the registry operations as JSON endpoints over a
//! single lock-guarded registry.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NewWorkRecordRequest, NewWorkTypeRequest, NewWorkerRequest, SurnameQuery};
pub use response::{ApiError, ApiErrorResponse, CreatedResponse, WorkerSummary};
pub use state::AppState;
