//! Application state for the payroll HTTP API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::registry::PayrollRegistry;

/// Shared application state.
///
/// The registry is not safe for concurrent mutation, so every handler
/// holds this single lock for the whole of its registry work.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<Mutex<PayrollRegistry>>,
}

impl AppState {
    /// Creates a new application state owning the given registry.
    pub fn new(registry: PayrollRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Locks the registry.
    ///
    /// A poisoned lock is recovered. Mutations are single appends made after
    /// validation, so a panicking holder cannot leave partial state.
    pub fn registry(&self) -> MutexGuard<'_, PayrollRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
