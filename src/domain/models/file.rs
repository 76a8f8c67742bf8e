use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document types the assistant can ingest
pub const ACCEPTED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",                                                          // PDF
    "application/msword",                                                       // DOC
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",  // DOCX
    "text/plain",                                                               // TXT
];

/// File-picker `accept` attribute matching [`ACCEPTED_DOCUMENT_TYPES`]
pub const ACCEPTED_FILE_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt";

/// Shown when the user picks a file outside the accepted set
pub const INVALID_FILE_TYPE_MESSAGE: &str =
    "Invalid file type. Please upload only PDF, DOC/DOCX, or TXT files.";

/// Validation is by mime type only, never by extension
pub fn is_accepted_document_type(mime_type: &str) -> bool {
    ACCEPTED_DOCUMENT_TYPES.contains(&mime_type)
}

/// Coarse document category, used by the presentation layer for icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    Text,
    Other,
}

impl DocumentKind {
    pub fn from_mime_type(mime_type: &str) -> Self {
        match mime_type {
            "application/pdf" => DocumentKind::Pdf,
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                DocumentKind::Word
            }
            "text/plain" => DocumentKind::Text,
            _ => DocumentKind::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "📕",
            DocumentKind::Word => "📘",
            DocumentKind::Text => "📄",
            DocumentKind::Other => "📎",
        }
    }
}

/// A user-selected file awaiting send, client-side only.
///
/// Only the metadata snapshot is held here; the raw bytes stay in the
/// browser's file handle until the request is actually issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHandle {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl DocumentHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_mime_type(&self.mime_type)
    }

    /// Descriptive string attached to the user's chat turn, KB with 2 decimals
    pub fn summary(&self) -> String {
        format!("{} ({:.2} KB)", self.name, self.size_bytes as f64 / 1024.0)
    }
}

/// Server-held file record, mirrored locally as a read cache.
///
/// The local list always reflects the last full fetch of GET /files; there is
/// no incremental patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Human-readable byte count for the file manager
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.1} GB", bytes as f64 / 1_073_741_824.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_types_by_mime_only() {
        assert!(is_accepted_document_type("application/pdf"));
        assert!(is_accepted_document_type("text/plain"));
        assert!(is_accepted_document_type("application/msword"));
        assert!(is_accepted_document_type(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));

        // A .txt extension does not rescue a wrong mime type
        assert!(!is_accepted_document_type("image/png"));
        assert!(!is_accepted_document_type("application/octet-stream"));
        assert!(!is_accepted_document_type(""));
    }

    #[test]
    fn test_attachment_summary_format() {
        let handle = DocumentHandle::new("doc.txt", 2048, "text/plain");
        assert_eq!(handle.summary(), "doc.txt (2.00 KB)");

        let handle = DocumentHandle::new("report.pdf", 1536, "application/pdf");
        assert_eq!(handle.summary(), "report.pdf (1.50 KB)");
    }

    #[test]
    fn test_document_kind_from_mime() {
        assert_eq!(DocumentKind::from_mime_type("application/pdf"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_mime_type("application/msword"), DocumentKind::Word);
        assert_eq!(DocumentKind::from_mime_type("text/plain"), DocumentKind::Text);
        assert_eq!(DocumentKind::from_mime_type("image/gif"), DocumentKind::Other);
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(2_147_483_648), "2.0 GB");
    }

    #[test]
    fn test_stored_file_tolerates_sparse_records() {
        let file: StoredFile =
            serde_json::from_str(r#"{"id":"abc","file_name":"notes.txt"}"#).unwrap();
        assert_eq!(file.id, "abc");
        assert_eq!(file.title, None);
        assert_eq!(file.created_at, None);
    }
}
