//! Pure pick'em domain logic: eligibility, scoring, status, visibility.
//!
//! Everything here operates on plain rows and a caller-supplied clock so it
//! is testable without a database.

pub mod eligibility;
pub mod scoring;
pub mod status;
pub mod types;
pub mod visibility;
