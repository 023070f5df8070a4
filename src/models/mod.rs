//! Data models for employee records, drafts and form option lists.

pub mod draft;
pub mod employee;
pub mod options;

pub use draft::EmployeeDraft;
pub use employee::{Employee, EmployeePayload, Gender};
