use thiserror::Error;

/// Failures of the persisted key/value store. None of these ever reach the
/// user; callers fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("malformed value {value:?} for key {key:?}")]
    Malformed { key: String, value: String },
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Compiled-in content that violates the page invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("carousel needs at least one project")]
    NoProjects,
    #[error("nav anchor {0:?} must start with '#' and name a section")]
    InvalidAnchor(String),
}
