//! File manager panel: upload staging, inventory table, and preview pane

use dioxus::prelude::*;

use crate::domain::models::{
    ACCEPTED_FILE_EXTENSIONS, DocumentHandle, StoredFile, format_file_size,
};
use crate::shared::hooks::FileSessionState;
use crate::shared::services::ApiService;
use crate::shared::utils::format_created_at;
#[cfg(target_arch = "wasm32")]
use crate::shared::utils::dom;

const MANAGER_FILE_INPUT_ID: &str = "file-manager-input";

#[component]
pub fn FileManagerPanel(files: FileSessionState) -> Element {
    let api = use_context::<ApiService>();
    let session = files.session;

    // Initial inventory fetch on mount
    let mut files_mount = files.clone();
    let api_mount = api.clone();
    use_effect(move || {
        files_mount.refresh(api_mount.clone());
    });

    let inventory: Vec<StoredFile> = session.read().files().to_vec();
    let candidate = session.read().candidate().cloned();
    let uploading = session.read().is_uploading();
    let progress = session.read().progress_percent();
    let error = session.read().error().map(str::to_string);
    let selected = session.read().selected().cloned();
    let preview_url = session.read().preview_url().map(str::to_string);

    let mut files_pick = files.clone();
    let mut files_upload = files.clone();
    let api_upload = api.clone();

    let on_file_change = move |_evt: FormEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(file) = dom::picked_file_from_input(MANAGER_FILE_INPUT_ID) {
                if !files_pick.select_candidate(file) {
                    dom::reset_file_input(MANAGER_FILE_INPUT_ID);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &files_pick; // Suppress unused warning on the server build
    };

    let on_upload = move |_| {
        files_upload.upload(api_upload.clone());
        #[cfg(target_arch = "wasm32")]
        dom::reset_file_input(MANAGER_FILE_INPUT_ID);
    };

    rsx! {
        div { class: "file-manager",
            header { class: "file-manager__header",
                h2 { "File Manager" }
                p { class: "file-manager__subtitle", "Upload, manage and view your files" }
            }

            section { class: "file-manager__upload",
                input {
                    id: MANAGER_FILE_INPUT_ID,
                    r#type: "file",
                    accept: ACCEPTED_FILE_EXTENSIONS,
                    disabled: uploading,
                    onchange: on_file_change,
                }
                button {
                    class: "file-manager__upload-button",
                    disabled: candidate.is_none() || uploading,
                    onclick: on_upload,
                    if uploading { "Uploading..." } else { "Upload File" }
                }

                if let Some(error) = error {
                    p { class: "file-manager__error", "{error}" }
                }

                if let Some(handle) = candidate.as_ref() {
                    if !uploading {
                        CandidateSummary { handle: handle.clone() }
                    }
                }

                if uploading {
                    UploadProgress { progress }
                }
            }

            section { class: "file-manager__list",
                if inventory.is_empty() {
                    p { class: "file-manager__empty", "No files uploaded yet." }
                } else {
                    table { class: "file-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Uploaded" }
                                th { "" }
                            }
                        }
                        tbody {
                            for file in inventory.iter() {
                                FileRow {
                                    key: "{file.id}",
                                    file: file.clone(),
                                    selected: selected.as_ref().is_some_and(|s| s.id == file.id),
                                    on_select: {
                                        let mut files_select = files.clone();
                                        let api_select = api.clone();
                                        move |file: StoredFile| {
                                            files_select.select(&api_select, file);
                                        }
                                    },
                                    on_delete: {
                                        let mut files_delete = files.clone();
                                        let api_delete = api.clone();
                                        move |file_id: String| {
                                            files_delete.delete(api_delete.clone(), file_id);
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }

            if let (Some(file), Some(url)) = (selected.as_ref(), preview_url.as_ref()) {
                section { class: "file-preview",
                    h3 { class: "file-preview__title", "{file.file_name}" }
                    iframe {
                        class: "file-preview__frame",
                        src: "{url}",
                        title: "{file.file_name}",
                    }
                }
            }
        }
    }
}

#[component]
fn CandidateSummary(handle: DocumentHandle) -> Element {
    let size = format_file_size(handle.size_bytes);
    rsx! {
        div { class: "file-manager__candidate",
            span { "{handle.kind().icon()}" }
            span { "{handle.name}" }
            span { class: "file-manager__candidate-size", "({size})" }
        }
    }
}

#[component]
fn UploadProgress(progress: u8) -> Element {
    rsx! {
        div { class: "upload-progress",
            div { class: "upload-progress__track",
                div {
                    class: "upload-progress__bar",
                    style: "width: {progress}%",
                }
            }
            span { class: "upload-progress__label", "{progress}%" }
        }
    }
}

#[component]
fn FileRow(
    file: StoredFile,
    selected: bool,
    on_select: EventHandler<StoredFile>,
    on_delete: EventHandler<String>,
) -> Element {
    let row_class = if selected { "file-table__row file-table__row--selected" } else { "file-table__row" };
    let uploaded = format_created_at(file.created_at.as_ref());
    let row_file = file.clone();
    let delete_id = file.id.clone();

    rsx! {
        tr {
            class: "{row_class}",
            onclick: move |_| on_select.call(row_file.clone()),
            td { class: "file-table__name", "{file.file_name}" }
            td { class: "file-table__date", "{uploaded}" }
            td { class: "file-table__actions",
                button {
                    class: "file-table__delete",
                    title: "Delete file",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(delete_id.clone());
                    },
                    "🗑"
                }
            }
        }
    }
}
