//! Chat session state machine
//!
//! Owns the ordered message log and the in-flight request state for the Q&A
//! conversation. Pure Rust: the Dioxus hook in `shared::hooks` wraps this in a
//! `Signal` and drives the network round trip.

use crate::domain::models::{
    ChatMessage, DocumentHandle, INVALID_FILE_TYPE_MESSAGE, is_accepted_document_type,
};

/// Synthetic assistant turn substituted on any transport or parse failure
pub const FALLBACK_ASSISTANT_REPLY: &str = "Sorry, there was an error processing your request.";

/// Payload handed to the transport layer by [`ChatSession::begin_submit`]
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundChat {
    /// Draft text, trimmed
    pub text: String,
    /// Metadata of the attached document; the raw bytes travel separately
    pub attachment: Option<DocumentHandle>,
}

/// Conversation state: Idle -> Awaiting (begin_submit) -> Idle (complete_submit).
///
/// A failed round trip transitions back to Idle with a synthetic assistant
/// message rather than surfacing an error to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    pending_attachment: Option<DocumentHandle>,
    awaiting_reply: bool,
    attachment_error: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending_attachment(&self) -> Option<&DocumentHandle> {
        self.pending_attachment.as_ref()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn attachment_error(&self) -> Option<&str> {
        self.attachment_error.as_deref()
    }

    /// Update the draft text. No validation, no side effects.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether a submit would actually send something
    pub fn can_submit(&self) -> bool {
        !self.awaiting_reply && (!self.draft.trim().is_empty() || self.pending_attachment.is_some())
    }

    /// Validate and snapshot a picked file.
    ///
    /// Returns false when rejected, in which case the caller must reset its
    /// file-picker control. A rejection clears any previously accepted
    /// attachment; a new acceptance replaces it.
    pub fn select_attachment(&mut self, handle: DocumentHandle) -> bool {
        if self.awaiting_reply {
            // The UI disables the picker too, but the gate lives here
            self.attachment_error = Some("A message is already being sent.".to_string());
            return false;
        }
        if !is_accepted_document_type(&handle.mime_type) {
            self.attachment_error = Some(INVALID_FILE_TYPE_MESSAGE.to_string());
            self.pending_attachment = None;
            return false;
        }
        self.attachment_error = None;
        self.pending_attachment = Some(handle);
        true
    }

    /// Discard the pending attachment. Idempotent.
    pub fn clear_attachment(&mut self) {
        self.pending_attachment = None;
    }

    /// Start a submit: append the user turn, clear the draft and attachment,
    /// and enter the Awaiting state.
    ///
    /// Returns `None` (no-op) when there is nothing to send or a request is
    /// already in flight. Exactly one `complete_submit` must follow each
    /// `Some` return.
    pub fn begin_submit(&mut self) -> Option<OutboundChat> {
        if !self.can_submit() {
            return None;
        }

        let attachment = self.pending_attachment.take();
        let summary = attachment.as_ref().map(DocumentHandle::summary);
        let text = self.draft.trim().to_string();

        self.messages.push(ChatMessage::user(self.draft.clone(), summary));
        self.draft.clear();
        self.attachment_error = None;
        self.awaiting_reply = true;

        Some(OutboundChat { text, attachment })
    }

    /// Finish a submit: append the assistant turn and return to Idle.
    ///
    /// `None` stands for a missing `response` field, a parse failure, or a
    /// transport failure; all three collapse into the fixed fallback reply.
    pub fn complete_submit(&mut self, reply: Option<String>) {
        let content = reply.unwrap_or_else(|| FALLBACK_ASSISTANT_REPLY.to_string());
        self.messages.push(ChatMessage::assistant(content));
        self.awaiting_reply = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ChatRole;

    fn txt_handle(name: &str, size: u64) -> DocumentHandle {
        DocumentHandle::new(name, size, "text/plain")
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut session = ChatSession::new();
        session.set_draft("   ");
        assert!(session.begin_submit().is_none());
        assert!(session.messages().is_empty());
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn test_submit_with_text_only() {
        let mut session = ChatSession::new();
        session.set_draft("  What is in this doc?  ");

        let outbound = session.begin_submit().expect("should submit");
        assert_eq!(outbound.text, "What is in this doc?");
        assert!(outbound.attachment.is_none());
        assert!(session.is_awaiting_reply());
        assert_eq!(session.draft(), "");

        session.complete_submit(Some("It says hello.".to_string()));
        assert!(!session.is_awaiting_reply());

        let log = session.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].role, ChatRole::User);
        assert_eq!(log[1].role, ChatRole::Assistant);
        assert_eq!(log[1].content, "It says hello.");
    }

    #[test]
    fn test_submit_with_attachment_derives_summary() {
        let mut session = ChatSession::new();
        session.set_draft("What is in this doc?");
        assert!(session.select_attachment(txt_handle("doc.txt", 2048)));

        let outbound = session.begin_submit().unwrap();
        assert_eq!(outbound.attachment.as_ref().unwrap().name, "doc.txt");

        let user_turn = &session.messages()[0];
        assert_eq!(user_turn.attachment_summary.as_deref(), Some("doc.txt (2.00 KB)"));
        // Attachment is consumed by the submit
        assert!(session.pending_attachment().is_none());
    }

    #[test]
    fn test_attachment_only_submit_is_allowed() {
        let mut session = ChatSession::new();
        assert!(session.select_attachment(txt_handle("notes.txt", 100)));

        let outbound = session.begin_submit().unwrap();
        assert_eq!(outbound.text, "");
        assert!(outbound.attachment.is_some());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_rejected_mime_type_sets_error_and_clears_pending() {
        let mut session = ChatSession::new();
        assert!(session.select_attachment(txt_handle("good.txt", 10)));

        let accepted =
            session.select_attachment(DocumentHandle::new("image.png", 500, "image/png"));
        assert!(!accepted);
        assert_eq!(session.attachment_error(), Some(INVALID_FILE_TYPE_MESSAGE));
        assert!(session.pending_attachment().is_none());

        // A later valid selection clears the error
        assert!(session.select_attachment(txt_handle("good.txt", 10)));
        assert!(session.attachment_error().is_none());
    }

    #[test]
    fn test_failure_substitutes_fallback_reply() {
        let mut session = ChatSession::new();
        session.set_draft("hello?");
        session.begin_submit().unwrap();
        session.complete_submit(None);

        let log = session.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].content, FALLBACK_ASSISTANT_REPLY);
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn test_no_second_submit_while_awaiting() {
        let mut session = ChatSession::new();
        session.set_draft("first");
        session.begin_submit().unwrap();

        session.set_draft("second");
        assert!(session.begin_submit().is_none());
        // Selecting a new attachment is gated too
        assert!(!session.select_attachment(txt_handle("late.txt", 10)));

        session.complete_submit(Some("ok".to_string()));
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_clear_attachment_is_idempotent() {
        let mut session = ChatSession::new();
        session.select_attachment(txt_handle("a.txt", 1));
        session.clear_attachment();
        session.clear_attachment();
        assert!(session.pending_attachment().is_none());
    }

    #[test]
    fn test_log_order_is_append_order() {
        let mut session = ChatSession::new();
        for (i, reply) in ["one", "two", "three"].iter().enumerate() {
            session.set_draft(format!("q{}", i));
            session.begin_submit().unwrap();
            session.complete_submit(Some(reply.to_string()));
        }

        let contents: Vec<&str> =
            session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q0", "one", "q1", "two", "q2", "three"]);
    }
}
