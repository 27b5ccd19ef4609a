//! Data models for Claude Code conversation logs.
//!
//! - [`HistoryRecord`] - session touchpoints from `history.jsonl`
//! - [`AgentLogRecord`] - raw lines from per-project `agent-*.jsonl` files
//! - [`MessageContent`] - the string-or-parts message body
//! - [`Conversation`] / [`Message`] - the reconstructed, time-ordered output
//! - [`SessionIndex`] - sessions seen per project on the target day

pub mod conversation;
pub mod history;
pub mod session_index;

pub use conversation::{Conversation, Message, Role};
pub use history::{AgentLogRecord, AgentMessage, ContentPart, HistoryRecord, MessageContent};
pub use session_index::SessionIndex;
