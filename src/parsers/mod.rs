//! JSONL parsers for Claude Code history and agent conversation files
//!
//! # Error Handling Strategy
//!
//! Parsing is best-effort and never aborts a collection run:
//!
//! - **Individual line failures**: Malformed JSON lines and records with an unusable
//!   timestamp are logged at debug level and skipped, so a single bad line never
//!   costs the rest of the file.
//!
//! - **Field-level tolerance**: Record fields are deserialized leniently. A field with an
//!   unexpected JSON type reads as absent instead of rejecting the whole record.
//!
//! - **File-level failures**: A file that cannot be opened or read to the end is reported
//!   as a [`CollectError`](crate::error::CollectError). The history parser degrades to an
//!   empty index; agent file errors are handled by the caller, which skips that file.

pub mod content;
pub mod conversation;
pub mod deserializers;
pub mod history;
pub mod timestamp;

pub use content::{extract_text, extract_text_from_value};
pub use conversation::scan_agent_file;
pub use history::sessions_for_day;
pub use timestamp::{DayWindow, RawTimestamp, TimestampError, parse_iso8601, parse_millis};
