//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate string composition, number display, and chart
//! geometry from page and component logic to improve reuse and testability.

pub mod chart_layout;
pub mod compose;
pub mod format;
pub mod markdown;
