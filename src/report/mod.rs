//! Read-only views over collected conversations: statistics and the text feed
//! handed to the prompt generator.

pub mod stats;
pub mod summary;

pub use stats::{Statistics, statistics};
pub use summary::{MAX_MESSAGE_CHARS, format_for_summary, truncate_chars};
