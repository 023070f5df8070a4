//! Editable employee draft behind the register/edit form.

use super::employee::{Employee, EmployeePayload, Gender};
use super::options::DEPARTMENT_SEPARATOR;
use crate::date::{self, DateError};

/// In-memory, not-yet-persisted employee record.
///
/// `start_date` is derived from `day`/`month`/`year` and is only set when
/// they form a real calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub gender: Option<Gender>,
    /// Selected departments joined with `", "`, in selection order.
    pub department: String,
    pub salary: Option<u32>,
    pub start_date: Option<String>,
    pub image_path: String,
    pub day: Option<u32>,
    pub month: Option<String>,
    pub year: Option<i32>,
}

impl EmployeeDraft {
    /// Create a draft pre-filled from an existing record.
    ///
    /// Date pickers stay empty; call [`Self::load_start_date`] to fill them.
    pub fn from_record(emp: &Employee) -> Self {
        Self {
            name: emp.name.clone(),
            gender: parse_gender(emp),
            department: emp.department.clone(),
            salary: (emp.salary != 0).then_some(emp.salary),
            start_date: None,
            image_path: emp.image_path.clone(),
            day: None,
            month: None,
            year: None,
        }
    }

    /// Fill the date pickers from a stored timestamp.
    ///
    /// On failure the pickers and `start_date` are cleared.
    pub fn load_start_date(&mut self, timestamp: Option<&str>) -> Result<(), DateError> {
        self.day = None;
        self.month = None;
        self.year = None;
        self.start_date = None;

        let raw = timestamp.unwrap_or_default();
        let parts = date::decompose(raw)?;
        // Pickers only take values that compose back into a valid date
        let start_date = date::compose(parts.day, parts.month, parts.year)?;
        self.day = Some(parts.day);
        self.month = Some(parts.month.to_string());
        self.year = Some(parts.year);
        self.start_date = Some(start_date);
        Ok(())
    }

    /// Recompute `start_date` from the pickers.
    ///
    /// Incomplete pickers clear `start_date` without error.
    pub fn sync_start_date(&mut self) -> Result<(), DateError> {
        self.start_date = None;
        let (Some(day), Some(month), Some(year)) = (self.day, self.month.as_deref(), self.year) else {
            return Ok(());
        };
        self.start_date = Some(date::compose(day, month, year)?);
        Ok(())
    }

    /// Selected departments in order, without duplicates.
    pub fn departments(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.department.split(DEPARTMENT_SEPARATOR) {
            let name = name.trim();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Whether `name` is among the selected departments.
    pub fn has_department(&self, name: &str) -> bool {
        self.departments().contains(&name)
    }

    /// Select or deselect a department.
    ///
    /// Adding a present name or removing an absent one leaves the selection unchanged.
    pub fn update_departments(&mut self, name: &str, selected: bool) {
        let mut names: Vec<String> = self.departments().into_iter().map(str::to_string).collect();

        if selected {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        } else {
            names.retain(|n| n != name);
        }

        self.department = names.join(DEPARTMENT_SEPARATOR);
    }

    /// Build the request body for this draft with a composed start date.
    pub fn to_payload(&self, start_date: String) -> EmployeePayload {
        EmployeePayload {
            name: self.name.trim().to_string(),
            gender: self.gender.map(|g| g.label().to_string()).unwrap_or_default(),
            department: self.department.clone(),
            salary: self.salary.unwrap_or_default(),
            start_date,
            image_path: self.image_path.clone(),
        }
    }
}

/// Map the stored gender label onto a form choice.
fn parse_gender(emp: &Employee) -> Option<Gender> {
    let gender = Gender::from_label(&emp.gender);
    if gender.is_none() && !emp.gender.trim().is_empty() {
        tracing::warn!("Employee {}: unrecognized gender '{}', leaving it unselected", emp.id, emp.gender);
    }
    gender
}
