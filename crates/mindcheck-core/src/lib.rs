//! mindcheck-core
//!
//! Pure domain types for the well-being check-in: the submitted assessment,
//! the scored result, severity levels and field validation.
//! No web or AWS dependency; this is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod validation;
