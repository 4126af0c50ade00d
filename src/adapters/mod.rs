//! Infrastructure adapters. Implement ports.
//!
//! Filesystem store, file importers, letter writer, terminal UI. Map errors to DomainError.

pub mod import;
pub mod persistence;
pub mod render;
pub mod ui;
