//! Batch job status summaries for the admin dashboard.
//!
//! The backend reports each registered batch job implementation as a flat
//! dict naming the implementation and whether an instance of it is
//! currently queued or running.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Summary of a registered batch job implementation.
///
/// Value object: constructed from a backend dict, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusSummary {
    /// Name of the job implementation (e.g. `"ActivityReferencesModelAuditOneOffJob"`).
    pub job_type: String,
    /// Whether an instance of this job is currently queued or running.
    pub is_queued_or_running: bool,
}

impl JobStatusSummary {
    /// Decode a backend dict of the shape
    /// `{"job_type": <string>, "is_queued_or_running": <bool>}`.
    ///
    /// A dict that does not match that shape fails with
    /// [`CoreError::Validation`].
    pub fn from_backend_dict(dict: &serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(dict.clone()).map_err(|e| {
            CoreError::Validation(format!("Invalid job status summary dict: {e}"))
        })
    }

    /// Re-encode into the backend dict shape consumed by
    /// [`JobStatusSummary::from_backend_dict`].
    pub fn to_backend_dict(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::Internal(e.to_string()))
    }
}
