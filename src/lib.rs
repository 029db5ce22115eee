//! student-form library
//!
//! The form controller (`form`) has no terminal dependencies; `app` and
//! `ui` are the ratatui front end the binary drives.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod types;
pub mod ui;
