//! File readers feeding the roster and the invited list.

pub mod invite_sheet;
pub mod roster_json;

pub use invite_sheet::{parse_invite_sheet, read_invite_sheet};
pub use roster_json::{parse_roster_document, read_roster_document};
