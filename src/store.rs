//! Contract for the remote employee store.

use std::future::Future;

use crate::error::Result;
use crate::models::{Employee, EmployeePayload};

/// Remote CRUD operations on employee records.
///
/// Futures are `Send` so callers can spawn them on a multi-threaded runtime.
pub trait EmployeeStore: Send + Sync {
    /// Fetch every employee.
    fn list(&self) -> impl Future<Output = Result<Vec<Employee>>> + Send;

    /// Fetch one employee by id.
    fn get(&self, id: i64) -> impl Future<Output = Result<Employee>> + Send;

    /// Create a new employee. Yields the stored record when the backend echoes it.
    fn create(&self, payload: &EmployeePayload) -> impl Future<Output = Result<Option<Employee>>> + Send;

    /// Replace an existing employee. Yields the stored record when the backend echoes it.
    fn update(&self, id: i64, payload: &EmployeePayload) -> impl Future<Output = Result<Option<Employee>>> + Send;

    /// Delete an employee.
    fn delete(&self, id: i64) -> impl Future<Output = Result<()>> + Send;
}
