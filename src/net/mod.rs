//! Networking modules for the analysis-service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single `POST /query` call, `types` defines the wire
//! schema it speaks, and `error` names the ways the call can fail.

pub mod api;
pub mod error;
pub mod types;
