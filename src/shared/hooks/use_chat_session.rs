//! Chat session hook
//!
//! Wraps the pure [`ChatSession`] state machine in a Signal and drives the
//! request/response round trip against the Assistant Service. The browser
//! file handle is kept out of the state machine: the manager only sees the
//! metadata snapshot, the raw bytes travel from here.

use dioxus::prelude::*;

use crate::domain::session::ChatSession;
use crate::shared::services::ApiService;

#[derive(Clone, PartialEq)]
pub struct ChatSessionState {
    pub session: Signal<ChatSession>,
    #[cfg(target_arch = "wasm32")]
    picked_file: Signal<Option<web_sys::File>>,
}

impl ChatSessionState {
    pub fn set_draft(&mut self, text: String) {
        self.session.write().set_draft(text);
    }

    pub fn clear_attachment(&mut self) {
        self.session.write().clear_attachment();
        #[cfg(target_arch = "wasm32")]
        self.picked_file.set(None);
    }

    /// Validate and stage a picked browser file. Returns false when the
    /// manager rejected it, in which case the caller resets the picker.
    #[cfg(target_arch = "wasm32")]
    pub fn select_attachment(&mut self, file: web_sys::File) -> bool {
        use crate::domain::models::DocumentHandle;

        let handle = DocumentHandle::new(file.name(), file.size() as u64, file.type_());
        let accepted = self.session.write().select_attachment(handle);
        if accepted {
            self.picked_file.set(Some(file));
        } else {
            self.picked_file.set(None);
        }
        accepted
    }

    /// Submit the draft (and attachment, if any) to the chat endpoint.
    ///
    /// Every outcome ends in exactly one assistant turn: transport and parse
    /// failures are swallowed into the fallback reply, never raised.
    #[cfg(target_arch = "wasm32")]
    pub fn submit(&mut self, api: ApiService) {
        use crate::shared::logging;

        let outbound = match self.session.write().begin_submit() {
            Some(outbound) => outbound,
            None => return,
        };
        let file = self.picked_file.write().take();
        let mut session = self.session;

        spawn(async move {
            logging::log_chat_request_start(outbound.text.len(), file.is_some());
            let reply = match api.send_chat(&outbound.text, file).await {
                Ok(reply) => reply.response,
                Err(e) => {
                    logging::log_chat_request_failure(&e.to_string());
                    None
                }
            };
            session.write().complete_submit(reply);
        });
    }

    /// Server-side stub (no-op)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn submit(&mut self, _api: ApiService) {
        tracing::debug!("chat submit is only available in the browser");
    }
}

/// Hook to manage the chat session
pub fn use_chat_session() -> ChatSessionState {
    let session = use_signal(ChatSession::new);
    #[cfg(target_arch = "wasm32")]
    let picked_file = use_signal(|| None::<web_sys::File>);

    ChatSessionState {
        session,
        #[cfg(target_arch = "wasm32")]
        picked_file,
    }
}
