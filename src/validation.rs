//! Client-side checks run over an employee draft before submission.

use crate::models::EmployeeDraft;

pub const NAME_REQUIRED: &str = "Employee name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const GENDER_REQUIRED: &str = "Gender selection is required";
pub const DEPARTMENT_REQUIRED: &str = "At least one department must be selected";
pub const SALARY_REQUIRED: &str = "Salary selection is required";
pub const START_DATE_REQUIRED: &str = "Complete start date is required";

/// Minimum trimmed name length, in characters.
pub const MIN_NAME_LEN: usize = 3;

/// Ordered list of violated rules. Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All messages joined for a single notification.
    pub fn joined(&self, separator: &str) -> String {
        self.errors.join(separator)
    }

    fn push(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Check `draft` against every rule, in display order. Never short-circuits.
pub fn validate(draft: &EmployeeDraft) -> ValidationResult {
    let mut result = ValidationResult::default();

    let name = draft.name.trim();
    if name.is_empty() {
        result.push(NAME_REQUIRED);
    } else if name.chars().count() < MIN_NAME_LEN {
        result.push(NAME_TOO_SHORT);
    }

    if draft.gender.is_none() {
        result.push(GENDER_REQUIRED);
    }

    if draft.department.is_empty() {
        result.push(DEPARTMENT_REQUIRED);
    }

    // Zero is never a salary tier, so it counts as unset
    if draft.salary.is_none_or(|s| s == 0) {
        result.push(SALARY_REQUIRED);
    }

    let day_missing = draft.day.is_none_or(|d| d == 0);
    let month_missing = draft.month.as_deref().is_none_or(str::is_empty);
    let year_missing = draft.year.is_none_or(|y| y == 0);
    if day_missing || month_missing || year_missing {
        result.push(START_DATE_REQUIRED);
    }

    if !result.is_valid() {
        tracing::debug!("Draft failed validation: {}", result.joined(", "));
    }

    result
}
