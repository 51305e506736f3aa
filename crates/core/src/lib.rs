//! Pure domain types for the Exploria backend.
//!
//! This crate has zero internal dependencies (no DB, no async, no I/O) so
//! that the API layer, admin tooling, and any future workers can all share
//! the same payload types and their backend dict conversions.

pub mod error;
pub mod job_status;
pub mod playthrough_issue;
