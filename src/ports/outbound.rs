//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Employee, LetterFields};
use std::path::PathBuf;

/// Roster persistence. The whole roster is loaded and replaced at once.
#[async_trait::async_trait]
pub trait RosterPort: Send + Sync {
    /// Returns the stored roster in roster order. Empty if none was imported yet.
    async fn load_roster(&self) -> Result<Vec<Employee>, DomainError>;

    /// Replace the stored roster.
    async fn save_roster(&self, employees: &[Employee]) -> Result<(), DomainError>;
}

/// Invited-list persistence. Order is invitation order; ids are unique.
#[async_trait::async_trait]
pub trait InvitedListPort: Send + Sync {
    async fn load_invited(&self) -> Result<Vec<Employee>, DomainError>;

    async fn save_invited(&self, invited: &[Employee]) -> Result<(), DomainError>;
}

/// Templating collaborator. Turns one group's field set into a document.
#[async_trait::async_trait]
pub trait LetterRenderer: Send + Sync {
    /// Render one letter. Either the whole document is produced or nothing is.
    /// Returns where the document was written.
    async fn render(&self, fields: &LetterFields) -> Result<PathBuf, DomainError>;
}
