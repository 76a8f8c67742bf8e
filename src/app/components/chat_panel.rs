//! Chat panel: message log, attachment chip, and input form

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::eval as js_eval;

use crate::domain::models::{
    ACCEPTED_FILE_EXTENSIONS, ChatMessage, ChatRole, DocumentHandle, format_file_size,
};
use crate::shared::hooks::ChatSessionState;
use crate::shared::services::ApiService;
#[cfg(target_arch = "wasm32")]
use crate::shared::utils::dom;

const CHAT_FILE_INPUT_ID: &str = "chat-file-input";

#[component]
pub fn ChatPanel(chat: ChatSessionState) -> Element {
    let api = use_context::<ApiService>();
    let session = chat.session;

    // Auto-scroll to the newest message
    use_effect(move || {
        if !session.read().messages().is_empty() {
            #[cfg(target_arch = "wasm32")]
            {
                let script = r#"
                    setTimeout(() => {
                        const messagesEnd = document.getElementById('messages-end');
                        if (messagesEnd) {
                            messagesEnd.scrollIntoView({ behavior: 'smooth' });
                        }
                    }, 100);
                "#;
                let _ = js_eval(script);
            }
        }
    });

    let messages: Vec<ChatMessage> = session.read().messages().to_vec();
    let draft = session.read().draft().to_string();
    let awaiting = session.read().is_awaiting_reply();
    let attachment_error = session.read().attachment_error().map(str::to_string);
    let attachment = session.read().pending_attachment().cloned();
    let can_submit = session.read().can_submit();

    let mut chat_input = chat.clone();
    let mut chat_pick = chat.clone();
    let mut chat_clear = chat.clone();
    let mut chat_submit = chat.clone();

    let on_file_change = move |_evt: FormEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(file) = dom::picked_file_from_input(CHAT_FILE_INPUT_ID) {
                if !chat_pick.select_attachment(file) {
                    // Rejected picks must not linger in the control
                    dom::reset_file_input(CHAT_FILE_INPUT_ID);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &chat_pick; // Suppress unused warning on the server build
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        chat_submit.submit(api.clone());
        #[cfg(target_arch = "wasm32")]
        dom::reset_file_input(CHAT_FILE_INPUT_ID);
    };

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-messages",
                if messages.is_empty() {
                    EmptyState {}
                } else {
                    for message in messages.iter() {
                        MessageItem { message: message.clone() }
                    }
                }
                if awaiting {
                    TypingIndicator {}
                }
                div { id: "messages-end" }
            }

            if let Some(error) = attachment_error {
                div { class: "chat-panel__error", "{error}" }
            }

            if let Some(handle) = attachment {
                AttachmentChip {
                    handle,
                    on_clear: move |_| {
                        chat_clear.clear_attachment();
                        #[cfg(target_arch = "wasm32")]
                        dom::reset_file_input(CHAT_FILE_INPUT_ID);
                    },
                }
            }

            form { class: "chat-input", onsubmit: on_submit,
                input {
                    class: "chat-input__text",
                    r#type: "text",
                    placeholder: "Ask a question...",
                    value: "{draft}",
                    disabled: awaiting,
                    oninput: move |evt| chat_input.set_draft(evt.value()),
                }
                input {
                    id: CHAT_FILE_INPUT_ID,
                    class: "chat-input__file",
                    r#type: "file",
                    accept: ACCEPTED_FILE_EXTENSIONS,
                    disabled: awaiting,
                    onchange: on_file_change,
                }
                button {
                    class: "chat-input__send",
                    r#type: "submit",
                    disabled: awaiting || !can_submit,
                    if awaiting { "..." } else { "Send" }
                }
            }
            div { class: "chat-input__hint", "Supported file types: PDF, DOC/DOCX, TXT" }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state__icon", "💬" }
            p { "Ask me anything! I'm here to help." }
            p { class: "empty-state__hint",
                "You can upload PDF, DOC/DOCX, or TXT files for analysis."
            }
        }
    }
}

#[component]
fn MessageItem(message: ChatMessage) -> Element {
    let time_str = message.timestamp.format("%H:%M").to_string();
    match message.role {
        ChatRole::User => rsx! {
            div { class: "message message--user",
                div { class: "message__content", "{message.content}" }
                if let Some(summary) = message.attachment_summary.as_ref() {
                    p { class: "message__attachment", i { "File Uploaded: [File: {summary}]" } }
                }
                span { class: "message__timestamp", "{time_str}" }
            }
        },
        ChatRole::Assistant => {
            let html = render_markdown(&message.content);
            rsx! {
                div { class: "message message--assistant",
                    div { class: "message__content", dangerous_inner_html: "{html}" }
                    span { class: "message__timestamp", "{time_str}" }
                }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message message--assistant message--typing",
            span { class: "typing-dot" }
            span { class: "typing-dot" }
            span { class: "typing-dot" }
        }
    }
}

#[component]
fn AttachmentChip(handle: DocumentHandle, on_clear: EventHandler<()>) -> Element {
    let size = format_file_size(handle.size_bytes);
    rsx! {
        div { class: "attachment-chip",
            span { class: "attachment-chip__icon", "{handle.kind().icon()}" }
            span { class: "attachment-chip__name", "{handle.name}" }
            span { class: "attachment-chip__size", "({size})" }
            button {
                class: "attachment-chip__clear",
                r#type: "button",
                title: "Remove attachment",
                onclick: move |_| on_clear.call(()),
                "✕"
            }
        }
    }
}

fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{Parser, html};

    let mut out = String::new();
    html::push_html(&mut out, Parser::new(content));
    out
}
