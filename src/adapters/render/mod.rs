//! Letter renderers. Implement LetterRenderer.

pub mod json_letter;

pub use json_letter::JsonLetterWriter;
