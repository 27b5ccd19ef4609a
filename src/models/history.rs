use serde::Deserialize;
use serde_json::Value;

use crate::parsers::timestamp::RawTimestamp;

/// One line of the global `history.jsonl`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub project: Option<String>,
    #[serde(
        default,
        rename = "sessionId",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient"
    )]
    pub session_id: Option<String>,
}

/// One line of a project's `agent-*.jsonl` file
///
/// Every field is optional and tolerant of unexpected JSON types, so that a
/// record with one odd field still contributes what it can (its session id in
/// particular).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentLogRecord {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient"
    )]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub timestamp: Option<String>,
    #[serde(
        default,
        rename = "sessionId",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient"
    )]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<AgentMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub content: Option<MessageContent>,
}

/// Message content: either a plain string or an ordered list of parts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single element of a content list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ContentPart {
    /// A bare string element
    Text(String),
    /// A typed block such as `{"type":"text","text":"..."}` or `{"type":"tool_use",...}`
    Block { kind: Option<String>, text: Option<String> },
    Unsupported,
}

impl From<Value> for ContentPart {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ContentPart::Text(s),
            Value::Object(map) => ContentPart::Block {
                kind: map.get("type").and_then(Value::as_str).map(str::to_string),
                text: map.get("text").and_then(Value::as_str).map(str::to_string),
            },
            _ => ContentPart::Unsupported,
        }
    }
}
