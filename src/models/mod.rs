//! Core data models for the payroll registry.
//!
//! This module contains the domain models owned by the registry.

mod position;
mod work_type;
mod worker;

pub use position::Position;
pub use work_type::{WorkType, WorkTypeId};
pub use worker::{WorkRecord, Worker, WorkerId};
