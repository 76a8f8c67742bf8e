//! HTTP client for the Assistant Service
//!
//! The exact wire format is owned by the service; this module only knows the
//! five calls the client needs. URL composition is pure and compiled for
//! every target so it stays unit-testable; the transport methods are
//! WASM-only. JSON GET/DELETE go through `reqwasm`; the multipart POSTs use
//! `web_sys` FormData + fetch because the browser must pick the boundary.

#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use crate::config::DEFAULT_API_BASE_URL;
#[cfg(target_arch = "wasm32")]
use crate::domain::models::{ChatReply, StoredFile};
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::{AppError, Result};

/// Centralized HTTP access to the assistant/storage service
#[derive(Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    pub fn files_url(&self) -> String {
        format!("{}/files", self.base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/files/upload", self.base_url)
    }

    /// Per-file endpoint; ids are service-assigned and percent-encoded here
    pub fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.base_url, urlencoding::encode(file_id))
    }

    /// Preview URL for the presentation layer to embed. Composed only, never
    /// fetched or validated eagerly.
    pub fn preview_url(&self, file_id: &str) -> String {
        format!("{}/preview", self.file_url(file_id))
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl ApiService {
    /// POST /chat: trimmed message text plus the optional attached document
    pub async fn send_chat(
        &self,
        text: &str,
        attachment: Option<web_sys::File>,
    ) -> Result<ChatReply> {
        let form = web_sys::FormData::new()
            .map_err(|_| AppError::Transport("FormData creation failed".to_string()))?;
        form.append_with_str("message", text)
            .map_err(|_| AppError::Transport("FormData append failed".to_string()))?;
        if let Some(file) = attachment {
            form.append_with_blob_and_filename("context_file", &file, &file.name())
                .map_err(|_| AppError::Transport("FormData append failed".to_string()))?;
        }

        let response = post_form(&self.chat_url(), &form).await?;
        let json = wasm_bindgen_futures::JsFuture::from(
            response
                .json()
                .map_err(|_| AppError::Decode("response body is not JSON".to_string()))?,
        )
        .await
        .map_err(js_error)?;

        serde_wasm_bindgen::from_value(json).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// GET /files: the full authoritative inventory
    pub async fn list_files(&self) -> Result<Vec<StoredFile>> {
        let response = Request::get(&self.files_url()).send().await.map_err(transport)?;
        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                detail: response.status_text(),
            });
        }
        response
            .json::<Vec<StoredFile>>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// POST /files/upload: file bytes plus a title field. The response body
    /// is not otherwise consumed.
    pub async fn upload_file(&self, file: web_sys::File, title: &str) -> Result<()> {
        let form = web_sys::FormData::new()
            .map_err(|_| AppError::Transport("FormData creation failed".to_string()))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| AppError::Transport("FormData append failed".to_string()))?;
        form.append_with_str("title", title)
            .map_err(|_| AppError::Transport("FormData append failed".to_string()))?;

        post_form(&self.upload_url(), &form).await?;
        Ok(())
    }

    /// DELETE /files/{id}
    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        let response = Request::delete(&self.file_url(file_id))
            .send()
            .await
            .map_err(transport)?;
        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                detail: response.status_text(),
            });
        }
        Ok(())
    }
}

/// Multipart POST through the browser's fetch. The Content-Type header is
/// deliberately not set: the browser adds it together with the boundary.
#[cfg(target_arch = "wasm32")]
async fn post_form(url: &str, form: &web_sys::FormData) -> Result<web_sys::Response> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request as WebRequest, RequestInit, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form);

    let request =
        WebRequest::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window =
        web_sys::window().ok_or_else(|| AppError::Transport("no window object".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| AppError::Decode("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(AppError::Http {
            status: response.status(),
            detail: response.status_text(),
        });
    }
    Ok(response)
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> AppError {
    AppError::Transport(format!("{:?}", value))
}

#[cfg(target_arch = "wasm32")]
fn transport(error: reqwasm::Error) -> AppError {
    AppError::Transport(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_composition() {
        let api = ApiService::with_base_url("http://localhost:8000");
        assert_eq!(api.chat_url(), "http://localhost:8000/chat");
        assert_eq!(api.files_url(), "http://localhost:8000/files");
        assert_eq!(api.upload_url(), "http://localhost:8000/files/upload");
        assert_eq!(api.file_url("abc-123"), "http://localhost:8000/files/abc-123");
        assert_eq!(
            api.preview_url("abc-123"),
            "http://localhost:8000/files/abc-123/preview"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let api = ApiService::with_base_url("http://localhost:8000/");
        assert_eq!(api.files_url(), "http://localhost:8000/files");
    }

    #[test]
    fn test_file_ids_are_percent_encoded() {
        let api = ApiService::with_base_url("http://localhost:8000");
        assert_eq!(
            api.preview_url("a b/c"),
            "http://localhost:8000/files/a%20b%2Fc/preview"
        );
    }
}
