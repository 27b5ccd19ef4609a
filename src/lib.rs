//! Claude Daylog - collect a day's Claude Code conversations
//!
//! This library reads Claude Code's local logs stored in `~/.claude/` and
//! rebuilds the conversations of a single day:
//!
//! - Finding the projects active that day from `history.jsonl`
//! - Parsing each project's `agent-*.jsonl` files, tolerating malformed lines
//! - Keeping user/assistant messages inside the local day window
//! - Producing time-ordered conversations, statistics and a text feed for an LLM prompt
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use claude_daylog::{ConversationCollector, format_for_summary, statistics};
//!
//! let collector = ConversationCollector::from_claude_dir("/Users/alice/.claude");
//! let conversations = collector.collect_all(Local::now().date_naive());
//! let stats = statistics(&conversations);
//! println!("{} conversations, {} messages", stats.total_conversations, stats.total_messages);
//! println!("{}", format_for_summary(&conversations));
//! ```

pub mod cli;
pub mod collector;
pub mod error;
pub mod models;
pub mod parsers;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use collector::ConversationCollector;
pub use error::CollectError;
pub use models::{Conversation, Message, Role, SessionIndex};
pub use report::{Statistics, format_for_summary, statistics};
pub use utils::{ClaudePaths, encode_project_path};
