//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` owns the session transcript and its request lifecycle; `insights`
//! derives chart/KPI/table view models from the most recent answer. Both
//! are plain structs and functions so the logic tests natively; components
//! wrap them in signals.

pub mod chat;
pub mod insights;
