//! Conversation collection for a single day
//!
//! [`ConversationCollector`] reads `history.jsonl` to find the projects active on
//! the target day, scans each project's agent files in parallel
//! ([`read_project`]), turns each file into a [`Conversation`](crate::models::Conversation)
//! ([`assemble`]) and merges everything into one list ordered by start time.

pub mod assembler;
pub mod orchestrator;
pub mod project_logs;

pub use assembler::assemble;
pub use orchestrator::{ConversationCollector, sort_by_start_time};
pub use project_logs::{find_agent_files, read_project};
