//! Core domain layer for Media Dash.
//!
//! Holds the typed usage-record model, the closed selection and chart-kind
//! enumerations, the shared error type, display formatting helpers and CLI
//! settings with last-used persistence.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
