#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Backend dict does not match any known issue type: {0}")]
    UnknownIssueType(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
