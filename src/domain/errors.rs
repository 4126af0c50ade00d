//! Domain errors. Used by the engine, ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input the engine cannot build a letter from: an empty addressee group,
    /// an unknown gender tag, a missing grouping field. Raised before any
    /// field set is produced.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invited list is empty")]
    EmptyInvitedList,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
