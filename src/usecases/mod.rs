//! Application use cases. Orchestrate domain logic via ports.

pub mod letter_service;
pub mod roster_service;

pub use letter_service::LetterService;
pub use roster_service::{AddOutcome, RosterService, SearchQuery};
