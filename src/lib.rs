pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod roster;
pub mod store;
pub mod ui;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Result, StoreError};
