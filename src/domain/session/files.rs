//! File session state machine
//!
//! Synchronizes a local read cache of the server-held file inventory, manages
//! one upload at a time, and tracks the selected file for preview. Pure Rust;
//! the Dioxus hook drives the requests and the progress timer.

use crate::domain::models::{
    DocumentHandle, INVALID_FILE_TYPE_MESSAGE, StoredFile, is_accepted_document_type,
};

/// Progress increment per animation tick
pub const UPLOAD_PROGRESS_STEP: u8 = 5;

/// Milliseconds between animation ticks
pub const UPLOAD_TICK_MS: u32 = 100;

/// Upload state per file: Idle -> Uploading -> (animation -> Idle) | (Idle on failure).
///
/// The progress bar is cosmetic: the request has already completed before the
/// animation starts, and the bar only exists so the user sees the upload land.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSession {
    files: Vec<StoredFile>,
    selected: Option<StoredFile>,
    preview_url: Option<String>,
    candidate: Option<DocumentHandle>,
    uploading: bool,
    progress_percent: u8,
    error: Option<String>,
}

impl FileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[StoredFile] {
        &self.files
    }

    pub fn selected(&self) -> Option<&StoredFile> {
        self.selected.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn candidate(&self) -> Option<&DocumentHandle> {
        self.candidate.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the local inventory wholesale with the authoritative list
    pub fn apply_inventory(&mut self, files: Vec<StoredFile>) {
        self.files = files;
    }

    /// Validate and stage a picked file as the upload candidate.
    ///
    /// On rejection the error is set and any prior candidate is left
    /// untouched. Selection is refused outright while an upload is in flight;
    /// the manager enforces this, not just the disabled picker control.
    pub fn select_candidate(&mut self, handle: DocumentHandle) -> bool {
        if self.uploading {
            self.error = Some("An upload is already in progress.".to_string());
            return false;
        }
        if !is_accepted_document_type(&handle.mime_type) {
            self.error = Some(INVALID_FILE_TYPE_MESSAGE.to_string());
            return false;
        }
        self.error = None;
        self.candidate = Some(handle);
        true
    }

    /// Enter the Uploading state and hand the candidate to the transport
    /// layer. `None` when there is no candidate or an upload is in flight.
    pub fn begin_upload(&mut self) -> Option<DocumentHandle> {
        if self.uploading {
            return None;
        }
        let candidate = self.candidate.clone()?;
        self.uploading = true;
        self.progress_percent = 0;
        self.error = None;
        Some(candidate)
    }

    /// One animation tick. Returns true once the bar reaches 100, at which
    /// point the candidate and selection are cleared and the session is Idle
    /// again; the caller then triggers an inventory refresh.
    pub fn advance_progress(&mut self) -> bool {
        if !self.uploading {
            return true;
        }
        self.progress_percent = self.progress_percent.saturating_add(UPLOAD_PROGRESS_STEP).min(100);
        if self.progress_percent >= 100 {
            self.candidate = None;
            self.selected = None;
            self.preview_url = None;
            self.uploading = false;
            true
        } else {
            false
        }
    }

    /// Upload request failed: report and go Idle without scheduling the
    /// animation. The candidate stays staged so the user may retry.
    pub fn fail_upload(&mut self, detail: &str) {
        self.error = Some(format!("Upload failed: {}", detail));
        self.uploading = false;
    }

    /// Optimistic removal: drop the file locally before the delete request
    /// resolves. The trailing refresh is the sole correction mechanism if the
    /// request later fails.
    pub fn remove_file(&mut self, file_id: &str) {
        self.files.retain(|file| file.id != file_id);
        if self.selected.as_ref().is_some_and(|f| f.id == file_id) {
            self.selected = None;
            self.preview_url = None;
        }
    }

    /// Delete request failed; the optimistic removal is not rolled back
    pub fn fail_delete(&mut self, detail: &str) {
        self.error = Some(format!("Delete failed: {}", detail));
    }

    /// Select a stored file for preview. The URL is composed, not fetched:
    /// the presentation layer embeds it best-effort.
    pub fn select_stored(&mut self, file: StoredFile, preview_url: String) {
        self.selected = Some(file);
        self.preview_url = Some(preview_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str, name: &str) -> StoredFile {
        StoredFile {
            id: id.to_string(),
            file_name: name.to_string(),
            title: None,
            status: None,
            created_at: None,
        }
    }

    fn txt_handle(name: &str) -> DocumentHandle {
        DocumentHandle::new(name, 1024, "text/plain")
    }

    #[test]
    fn test_rejected_mime_type_keeps_prior_candidate() {
        let mut session = FileSession::new();
        assert!(session.select_candidate(txt_handle("keep.txt")));

        let accepted =
            session.select_candidate(DocumentHandle::new("photo.png", 99, "image/png"));
        assert!(!accepted);
        assert_eq!(session.error(), Some(INVALID_FILE_TYPE_MESSAGE));
        // Prior candidate untouched, unlike the chat manager
        assert_eq!(session.candidate().unwrap().name, "keep.txt");
    }

    #[test]
    fn test_upload_without_candidate_is_noop() {
        let mut session = FileSession::new();
        assert!(session.begin_upload().is_none());
        assert!(!session.is_uploading());
    }

    #[test]
    fn test_progress_is_monotonic_in_steps_of_five_and_ends_at_100() {
        let mut session = FileSession::new();
        session.select_candidate(txt_handle("doc.txt"));
        session.select_stored(stored("1", "doc.txt"), "/files/1/preview".to_string());
        session.begin_upload().unwrap();

        let mut seen = vec![session.progress_percent()];
        while !session.advance_progress() {
            seen.push(session.progress_percent());
            assert!(session.is_uploading());
        }
        seen.push(session.progress_percent());

        assert_eq!(*seen.last().unwrap(), 100);
        for pair in seen.windows(2) {
            assert_eq!(pair[1] - pair[0], UPLOAD_PROGRESS_STEP);
        }

        // Completion clears candidate, selection and the busy flag
        assert!(!session.is_uploading());
        assert!(session.candidate().is_none());
        assert!(session.selected().is_none());
        assert!(session.preview_url().is_none());
    }

    #[test]
    fn test_selection_is_gated_while_uploading() {
        let mut session = FileSession::new();
        session.select_candidate(txt_handle("first.txt"));
        session.begin_upload().unwrap();

        assert!(!session.select_candidate(txt_handle("second.txt")));
        assert_eq!(session.candidate().unwrap().name, "first.txt");
        // No concurrent second upload either
        assert!(session.begin_upload().is_none());
    }

    #[test]
    fn test_failed_upload_reports_and_keeps_candidate() {
        let mut session = FileSession::new();
        session.select_candidate(txt_handle("doc.txt"));
        session.begin_upload().unwrap();
        session.fail_upload("server unreachable");

        assert_eq!(session.error(), Some("Upload failed: server unreachable"));
        assert!(!session.is_uploading());
        assert!(session.candidate().is_some());
    }

    #[test]
    fn test_optimistic_delete_removes_immediately() {
        let mut session = FileSession::new();
        session.apply_inventory(vec![stored("a", "a.txt"), stored("b", "b.pdf")]);
        session.select_stored(stored("a", "a.txt"), "/files/a/preview".to_string());

        session.remove_file("a");
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].id, "b");
        // Deleting the selected file clears selection and preview
        assert!(session.selected().is_none());
        assert!(session.preview_url().is_none());
    }

    #[test]
    fn test_delete_of_unselected_file_keeps_selection() {
        let mut session = FileSession::new();
        session.apply_inventory(vec![stored("a", "a.txt"), stored("b", "b.pdf")]);
        session.select_stored(stored("b", "b.pdf"), "/files/b/preview".to_string());

        session.remove_file("a");
        assert_eq!(session.selected().unwrap().id, "b");
    }

    #[test]
    fn test_refresh_replaces_inventory_wholesale() {
        let mut session = FileSession::new();
        session.apply_inventory(vec![stored("a", "a.txt")]);
        // A stale optimistic removal is corrected by the authoritative list
        session.remove_file("a");
        session.fail_delete("network down");

        session.apply_inventory(vec![stored("a", "a.txt"), stored("c", "c.doc")]);
        let ids: Vec<&str> = session.files().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(session.error(), Some("Delete failed: network down"));
    }
}
