//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the chat surfaces while reading and
//! writing shared chat state from Leptos context providers.

pub mod background_decor;
pub mod bar_chart;
pub mod chat_interface;
pub mod controls_bar;
pub mod example_queries;
pub mod header;
pub mod hero_section;
pub mod insight_card;
pub mod insights_panel;
