//! ICS document generation and validation (RFC 5545).
//!
//! Generation writes content lines directly; the icalendar crate's parser is
//! only used by `validate_ics`.

mod escape;
mod fold;
mod generate;
mod uid;
mod validate;

pub use escape::{escape_text, unescape_text};
pub use fold::{MAX_LINE_LENGTH, fold_line, unfold_lines};
pub use generate::{CRLF, ICS_CONTENT_TYPE, PRODID, generate_ics, generate_ics_at};
pub use uid::generate_uid;
pub use validate::{ValidatedEvent, validate_ics};
