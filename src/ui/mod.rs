//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod register_panel;

pub use app::{App, Route};
