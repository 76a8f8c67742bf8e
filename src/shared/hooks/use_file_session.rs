//! File session hook
//!
//! Wraps the pure [`FileSession`] state machine in a Signal and drives the
//! inventory refresh, upload (with its cosmetic progress animation), delete,
//! and preview-selection flows.

use dioxus::prelude::*;

use crate::domain::models::StoredFile;
use crate::domain::session::FileSession;
use crate::shared::services::ApiService;

#[derive(Clone, PartialEq)]
pub struct FileSessionState {
    pub session: Signal<FileSession>,
    #[cfg(target_arch = "wasm32")]
    picked_file: Signal<Option<web_sys::File>>,
}

impl FileSessionState {
    /// Re-fetch the full inventory and replace the local cache wholesale.
    /// On fetch failure the last known list is kept and a warning is logged.
    #[cfg(target_arch = "wasm32")]
    pub fn refresh(&mut self, api: ApiService) {
        let mut session = self.session;
        spawn(async move {
            refresh_inventory(&api, &mut session).await;
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn refresh(&mut self, _api: ApiService) {}

    /// Validate and stage a picked browser file as the upload candidate
    #[cfg(target_arch = "wasm32")]
    pub fn select_candidate(&mut self, file: web_sys::File) -> bool {
        use crate::domain::models::DocumentHandle;

        let handle = DocumentHandle::new(file.name(), file.size() as u64, file.type_());
        let accepted = self.session.write().select_candidate(handle);
        if accepted {
            self.picked_file.set(Some(file));
        }
        accepted
    }

    /// Upload the staged candidate, then run the progress animation and
    /// finish with an authoritative refresh.
    ///
    /// The animation is cosmetic: the request has already completed before
    /// the first tick. It exists so the upload visibly lands in the UI.
    #[cfg(target_arch = "wasm32")]
    pub fn upload(&mut self, api: ApiService) {
        use crate::domain::session::files::UPLOAD_TICK_MS;
        use crate::shared::logging;
        use gloo_timers::future::TimeoutFuture;

        let candidate = match self.session.write().begin_upload() {
            Some(candidate) => candidate,
            None => return,
        };
        let file = self.picked_file.write().take();
        let mut session = self.session;
        let mut picked_file = self.picked_file;

        spawn(async move {
            let Some(file) = file else {
                session.write().fail_upload("file handle is gone");
                return;
            };

            logging::log_upload_start(&candidate.name, candidate.size_bytes);
            match api.upload_file(file.clone(), &candidate.name).await {
                Ok(()) => {
                    loop {
                        TimeoutFuture::new(UPLOAD_TICK_MS).await;
                        let done = session.write().advance_progress();
                        if done {
                            break;
                        }
                    }
                    refresh_inventory(&api, &mut session).await;
                }
                Err(e) => {
                    logging::log_upload_failure(&candidate.name, &e.to_string());
                    session.write().fail_upload(&e.to_string());
                    // The candidate stays staged, so keep its handle for retry
                    picked_file.set(Some(file));
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn upload(&mut self, _api: ApiService) {
        tracing::debug!("file upload is only available in the browser");
    }

    /// Optimistically remove the file locally, issue the delete, then always
    /// resync from the authoritative list regardless of outcome.
    #[cfg(target_arch = "wasm32")]
    pub fn delete(&mut self, api: ApiService, file_id: String) {
        use crate::shared::logging;

        self.session.write().remove_file(&file_id);
        let mut session = self.session;

        spawn(async move {
            logging::log_delete_start(&file_id);
            if let Err(e) = api.delete_file(&file_id).await {
                logging::log_delete_failure(&file_id, &e.to_string());
                session.write().fail_delete(&e.to_string());
            }
            // A failed delete is silently corrected by this refresh
            refresh_inventory(&api, &mut session).await;
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn delete(&mut self, _api: ApiService, _file_id: String) {}

    /// Select a stored file and derive its preview URL. Best-effort: the
    /// presentation layer embeds the URL without eager validation.
    pub fn select(&mut self, api: &ApiService, file: StoredFile) {
        let preview_url = api.preview_url(&file.id);
        self.session.write().select_stored(file, preview_url);
    }
}

#[cfg(target_arch = "wasm32")]
async fn refresh_inventory(api: &ApiService, session: &mut Signal<FileSession>) {
    use crate::shared::logging;

    match api.list_files().await {
        Ok(files) => {
            logging::log_inventory_refresh_result(files.len());
            session.write().apply_inventory(files);
        }
        Err(e) => {
            // Keep the stale list rather than blanking the panel
            logging::log_inventory_refresh_failure(&e.to_string());
        }
    }
}

/// Hook to manage the file inventory session
pub fn use_file_session() -> FileSessionState {
    let session = use_signal(FileSession::new);
    #[cfg(target_arch = "wasm32")]
    let picked_file = use_signal(|| None::<web_sys::File>);

    FileSessionState {
        session,
        #[cfg(target_arch = "wasm32")]
        picked_file,
    }
}
