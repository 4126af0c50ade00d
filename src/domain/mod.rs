//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the letter engine live here: inflection table, agreement
//! rules, grouping, phrase building and field assembly. Dependencies flow inward.

pub mod assembler;
pub mod entities;
pub mod errors;
pub mod grammar;
pub mod inflection;
pub mod partition;
pub mod phrases;

pub use assembler::{LetterBatch, LetterFields, assemble_batch};
pub use entities::{CountForm, Employee, EmployeeId, Gender};
pub use errors::DomainError;
pub use grammar::resolve_count_form;
pub use inflection::{FormSet, Forms, InflectionTable};
pub use partition::{AddresseeGroup, GroupKey, ResponsiblePerson, partition_groups};
pub use phrases::{PhraseSet, build_phrases};
