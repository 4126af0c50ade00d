//! invitation-letters: grouping and Arabic agreement engine for batches of
//! formal invitation letters, with Hexagonal Architecture around it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
