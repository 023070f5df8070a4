//! Employee records as exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Gender choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All choices in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Display and wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a stored label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|g| g.label().eq_ignore_ascii_case(label))
    }
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, deserialize_with = "de_salary")]
    pub salary: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub image_path: String,
}

/// Accept integral or decimal salaries (`45000`, `45000.00`); null reads as zero.
fn de_salary<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!("salary out of range: {value}")));
    }
    Ok(value.round() as u32)
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub gender: String,
    pub department: String,
    pub salary: u32,
    pub start_date: String,
    pub image_path: String,
}
