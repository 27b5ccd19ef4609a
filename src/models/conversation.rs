use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Map a role or entry-type tag onto a role, `None` for anything else
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One turn of a reconstructed conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Local wall-clock time with any zone information stripped
    pub timestamp: NaiveDateTime,
    pub project: String,
    pub session_id: String,
}

/// All day-matching messages of a single `agent-*.jsonl` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub project: String,
    pub session_id: String,
    pub agent_id: String,
    pub messages: Vec<Message>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl Conversation {
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }
}
