// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod file;
pub mod message;

pub use file::{
    DocumentHandle, DocumentKind, StoredFile, ACCEPTED_DOCUMENT_TYPES, ACCEPTED_FILE_EXTENSIONS,
    INVALID_FILE_TYPE_MESSAGE, format_file_size, is_accepted_document_type,
};
pub use message::{ChatMessage, ChatReply, ChatRole};
