//! Terminal UI layer for Media Dash.
//!
//! Provides themes, header and selector components, the summary and chart
//! views, the aggregate table view, and the main application event loop
//! built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod summary_view;
pub mod table_view;
pub mod themes;

pub use dash_core as core;
