//! In-memory store and recording notifier for unit tests.

use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::models::{Employee, EmployeePayload};
use crate::notify::{Notification, Notifier};
use crate::store::EmployeeStore;

/// Sample record with a March 15th, 2021 start date.
pub fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        gender: "Female".to_string(),
        department: "Engineer".to_string(),
        salary: 45000,
        start_date: Some("2021-03-15T00:00:00.000Z".to_string()),
        image_path: String::new(),
    }
}

/// Store backed by a vector. Records every call it receives.
#[derive(Default)]
pub struct FakeStore {
    employees: Mutex<Vec<Employee>>,
    calls: Mutex<Vec<String>>,
    /// When set, every call fails with this server message.
    failure: Option<Option<String>>,
    /// Answer saves with success but no record.
    bare_replies: bool,
}

impl FakeStore {
    pub fn with(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            ..Default::default()
        }
    }

    pub fn failing(message: Option<&str>) -> Self {
        Self {
            failure: Some(message.map(str::to_string)),
            ..Default::default()
        }
    }

    /// Store whose create and update replies carry no record.
    pub fn bare_replies(employees: Vec<Employee>) -> Self {
        Self {
            bare_replies: true,
            ..Self::with(employees)
        }
    }

    fn reply(&self, record: Employee) -> Option<Employee> {
        (!self.bare_replies).then_some(record)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(StoreError::Rejected {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn to_record(id: i64, payload: &EmployeePayload) -> Employee {
        Employee {
            id,
            name: payload.name.clone(),
            gender: payload.gender.clone(),
            department: payload.department.clone(),
            salary: payload.salary,
            start_date: Some(payload.start_date.clone()),
            image_path: payload.image_path.clone(),
        }
    }
}

impl EmployeeStore for FakeStore {
    async fn list(&self) -> Result<Vec<Employee>> {
        self.record("list".to_string())?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Employee> {
        self.record(format!("get {id}"))?;
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::rejected("Employee not found"))
    }

    async fn create(&self, payload: &EmployeePayload) -> Result<Option<Employee>> {
        self.record("create".to_string())?;
        let mut employees = self.employees.lock().unwrap();
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let record = Self::to_record(id, payload);
        employees.push(record.clone());
        Ok(self.reply(record))
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<Option<Employee>> {
        self.record(format!("update {id}"))?;
        let mut employees = self.employees.lock().unwrap();
        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::rejected("Employee not found"))?;
        *slot = Self::to_record(id, payload);
        Ok(self.reply(slot.clone()))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record(format!("delete {id}"))?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(StoreError::rejected("Employee not found"));
        }
        Ok(())
    }
}

/// Notifier that keeps everything it is asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Drain recorded notifications.
    pub fn taken(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notes.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notes.lock().unwrap().push(notification);
    }
}
