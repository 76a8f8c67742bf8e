use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn in the conversation.
///
/// Messages are append-only: once pushed onto the session log they are never
/// mutated or removed. The log is session-scoped and not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    /// May be empty when the turn carried only an attached document
    pub content: String,
    /// `"{name} ({size} KB)"`, present only on user turns with an attachment
    #[serde(default)]
    pub attachment_summary: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, attachment_summary: Option<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            attachment_summary,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            attachment_summary: None,
            timestamp: Utc::now(),
        }
    }
}

/// Wire shape of the assistant's reply to POST /chat.
///
/// The `response` field is optional on purpose: a missing field and a parse
/// failure are handled the same way (fallback assistant turn).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_tolerates_missing_response_field() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.response, None);

        let reply: ChatReply = serde_json::from_str(r#"{"response":"hello"}"#).unwrap();
        assert_eq!(reply.response.as_deref(), Some("hello"));
    }

    #[test]
    fn test_user_message_carries_attachment_summary() {
        let msg = ChatMessage::user("what is this?", Some("doc.txt (2.00 KB)".to_string()));
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.attachment_summary.as_deref(), Some("doc.txt (2.00 KB)"));
    }
}
