//! Playthrough issue records for exploration statistics.
//!
//! An issue describes a problem detected across recorded learner
//! playthroughs of an exploration (quitting early, repeatedly answering
//! incorrectly, looping between states). The backend stores issues as
//! dicts discriminated by an `issue_type` string over a closed set of
//! types; each type carries its own customization-argument schema.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Issue type discriminator
// ---------------------------------------------------------------------------

/// The closed set of known playthrough issue types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    EarlyQuit,
    MultipleIncorrectSubmissions,
    CyclicStateTransitions,
}

impl IssueType {
    /// Return the discriminator string as it appears in backend dicts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyQuit => "EarlyQuit",
            Self::MultipleIncorrectSubmissions => "MultipleIncorrectSubmissions",
            Self::CyclicStateTransitions => "CyclicStateTransitions",
        }
    }

    /// Parse a discriminator string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "EarlyQuit" => Some(Self::EarlyQuit),
            "MultipleIncorrectSubmissions" => Some(Self::MultipleIncorrectSubmissions),
            "CyclicStateTransitions" => Some(Self::CyclicStateTransitions),
            _ => None,
        }
    }

    /// All valid discriminator values.
    pub const ALL: &'static [&'static str] = &[
        "EarlyQuit",
        "MultipleIncorrectSubmissions",
        "CyclicStateTransitions",
    ];
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Customization arguments
// ---------------------------------------------------------------------------

/// The `{"value": ...}` envelope the backend wraps every customization
/// argument in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgValue<T> {
    pub value: T,
}

impl<T> ArgValue<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Customization arguments for an `EarlyQuit` issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyQuitCustomizationArgs {
    /// The state the learner was in when they quit.
    pub state_name: ArgValue<String>,
    /// Time spent in the exploration before quitting, in milliseconds.
    pub time_spent_in_exp_in_msecs: ArgValue<f64>,
}

/// Customization arguments for a `MultipleIncorrectSubmissions` issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleIncorrectSubmissionsCustomizationArgs {
    /// The state whose answers were repeatedly incorrect.
    pub state_name: ArgValue<String>,
    pub num_times_answered_incorrectly: ArgValue<i32>,
}

/// Customization arguments for a `CyclicStateTransitions` issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclicStateTransitionsCustomizationArgs {
    /// The cycle of states the learner kept revisiting, in visit order.
    pub state_names: ArgValue<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Playthrough issues
// ---------------------------------------------------------------------------

/// A problem detected across recorded playthroughs of an exploration.
///
/// Serialized as JSON with an internally-tagged `"issue_type"`
/// discriminator so the frontend can route issues by type string. Each
/// case carries its own customization-argument schema plus the fields
/// shared by every issue record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "issue_type")]
pub enum PlaythroughIssue {
    EarlyQuit {
        issue_customization_args: EarlyQuitCustomizationArgs,
        playthrough_ids: Vec<String>,
        schema_version: i32,
        is_valid: bool,
    },
    MultipleIncorrectSubmissions {
        issue_customization_args: MultipleIncorrectSubmissionsCustomizationArgs,
        playthrough_ids: Vec<String>,
        schema_version: i32,
        is_valid: bool,
    },
    CyclicStateTransitions {
        issue_customization_args: CyclicStateTransitionsCustomizationArgs,
        playthrough_ids: Vec<String>,
        schema_version: i32,
        is_valid: bool,
    },
}

impl PlaythroughIssue {
    /// Decode a backend dict into the matching issue variant.
    ///
    /// The discriminator is checked first: a dict whose `issue_type` is
    /// absent, not a string, or outside the known set is rejected with
    /// [`CoreError::UnknownIssueType`] before any other structural check.
    /// A known discriminator with a malformed body is rejected with
    /// [`CoreError::Validation`].
    pub fn from_backend_dict(dict: &serde_json::Value) -> Result<Self, CoreError> {
        let known = dict
            .get("issue_type")
            .and_then(serde_json::Value::as_str)
            .and_then(IssueType::from_str);
        if known.is_none() {
            return Err(CoreError::UnknownIssueType(dict.to_string()));
        }

        serde_json::from_value(dict.clone()).map_err(|e| {
            CoreError::Validation(format!("Invalid playthrough issue dict: {e}"))
        })
    }

    /// Re-encode into the backend dict shape consumed by
    /// [`PlaythroughIssue::from_backend_dict`].
    pub fn to_backend_dict(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self).map_err(|e| CoreError::Internal(e.to_string()))
    }

    /// The discriminator for this issue.
    pub fn issue_type(&self) -> IssueType {
        match self {
            Self::EarlyQuit { .. } => IssueType::EarlyQuit,
            Self::MultipleIncorrectSubmissions { .. } => IssueType::MultipleIncorrectSubmissions,
            Self::CyclicStateTransitions { .. } => IssueType::CyclicStateTransitions,
        }
    }

    /// IDs of the recorded playthroughs exhibiting this issue.
    pub fn playthrough_ids(&self) -> &[String] {
        match self {
            Self::EarlyQuit {
                playthrough_ids, ..
            }
            | Self::MultipleIncorrectSubmissions {
                playthrough_ids, ..
            }
            | Self::CyclicStateTransitions {
                playthrough_ids, ..
            } => playthrough_ids,
        }
    }

    /// Schema version of the stored issue record.
    pub fn schema_version(&self) -> i32 {
        match self {
            Self::EarlyQuit { schema_version, .. }
            | Self::MultipleIncorrectSubmissions { schema_version, .. }
            | Self::CyclicStateTransitions { schema_version, .. } => *schema_version,
        }
    }

    /// Whether the issue still applies to the current exploration version.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::EarlyQuit { is_valid, .. }
            | Self::MultipleIncorrectSubmissions { is_valid, .. }
            | Self::CyclicStateTransitions { is_valid, .. } => *is_valid,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a stored issue schema version is at least 1.
///
/// The decoders copy `schema_version` verbatim; callers that persist
/// issues run this before writing.
pub fn validate_schema_version(version: i32) -> Result<(), CoreError> {
    if version >= 1 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Issue schema version must be at least 1, got {version}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
