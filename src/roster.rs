//! Employee list shown on the dashboard: loading, search and deletion.

use crate::error::StoreError;
use crate::models::Employee;
use crate::notify::{Notification, Notifier};
use crate::store::EmployeeStore;

pub const LIST_FAILED: &str = "Failed to load employee data. Please try again.";
pub const LIST_EMPTY: &str = "No employees found or invalid response format";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully!";
pub const DELETE_FAILED: &str = "Delete failed. Please try again.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this employee?";

/// Loaded employees plus the current search.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    /// Raw search text as typed.
    pub query: String,
    search_expanded: bool,
    /// Ids with a delete request still outstanding.
    deleting: Vec<i64>,
}

impl Roster {
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_search_expanded(&self) -> bool {
        self.search_expanded
    }

    /// Show or hide the search box. Hiding it clears the query.
    pub fn toggle_search(&mut self) {
        self.search_expanded = !self.search_expanded;
        if !self.search_expanded {
            self.query.clear();
        }
    }

    /// Employees matching the current query, in load order.
    pub fn visible(&self) -> Vec<&Employee> {
        let query = self.query.to_lowercase();
        self.employees.iter().filter(|e| matches_query(e, &query)).collect()
    }

    /// Drop a deleted employee from the list.
    pub fn remove(&mut self, id: i64) {
        self.employees.retain(|e| e.id != id);
    }

    /// Record that a delete request for `id` was sent.
    pub fn begin_delete(&mut self, id: i64) {
        if !self.deleting.contains(&id) {
            self.deleting.push(id);
        }
    }

    /// Settle a delete request, dropping the row if it succeeded.
    pub fn finish_delete(&mut self, id: i64, deleted: bool) {
        self.deleting.retain(|&d| d != id);
        if deleted {
            self.remove(id);
        }
    }

    pub fn is_deleting(&self) -> bool {
        !self.deleting.is_empty()
    }

    pub fn is_delete_pending(&self, id: i64) -> bool {
        self.deleting.contains(&id)
    }

    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Case-insensitive match on name, gender or department. `query` must be lower-case.
pub fn matches_query(emp: &Employee, query: &str) -> bool {
    query.is_empty()
        || emp.name.to_lowercase().contains(query)
        || emp.gender.to_lowercase().contains(query)
        || emp.department.to_lowercase().contains(query)
}

/// Fetch the full employee list, reporting failures through `notifier`.
pub async fn fetch_employees<S, N>(store: &S, notifier: &N) -> Option<Vec<Employee>>
where
    S: EmployeeStore,
    N: Notifier,
{
    match store.list().await {
        Ok(employees) => {
            tracing::info!("Loaded {} employees", employees.len());
            Some(employees)
        }
        Err(e @ (StoreError::Rejected { .. } | StoreError::MissingData)) => {
            tracing::warn!("Employee list rejected: {}", e);
            notifier.notify(Notification::error(LIST_EMPTY));
            None
        }
        Err(e) => {
            tracing::error!("Error fetching employees: {}", e);
            notifier.notify(Notification::error(LIST_FAILED));
            None
        }
    }
}

/// Delete `id` remotely. Returns `true` when the caller should drop it locally.
pub async fn delete_employee<S, N>(store: &S, notifier: &N, id: i64) -> bool
where
    S: EmployeeStore,
    N: Notifier,
{
    match store.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted employee {}", id);
            notifier.notify(Notification::success(EMPLOYEE_DELETED));
            true
        }
        Err(e) => {
            tracing::warn!("Delete of employee {} failed: {}", id, e);
            let message = e.server_message().unwrap_or(DELETE_FAILED);
            notifier.notify(Notification::error(message));
            false
        }
    }
}
