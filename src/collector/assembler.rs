use crate::models::{Conversation, Message};

/// Build a conversation from one agent file's messages
///
/// Messages are sorted by timestamp with a stable sort, so entries sharing a
/// timestamp keep their file order. `start_time`/`end_time` come from the
/// first and last message and stay `None` for an empty list.
pub fn assemble(
    project: impl Into<String>,
    session_id: impl Into<String>,
    agent_id: impl Into<String>,
    mut messages: Vec<Message>,
) -> Conversation {
    messages.sort_by_key(|m| m.timestamp);

    Conversation {
        project: project.into(),
        session_id: session_id.into(),
        agent_id: agent_id.into(),
        start_time: messages.first().map(|m| m.timestamp),
        end_time: messages.last().map(|m| m.timestamp),
        messages,
    }
}
