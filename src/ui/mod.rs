//! User Interface layer for student-form
//!
//! - Theme definitions and colors
//! - Reusable widgets (banner, status bar)
//! - Main render function

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
