//! Structured logging for the assistant client
//!
//! Consistent, contextual log helpers for the request/response flows. Only
//! the `tracing` core is used: in the browser there is no subscriber, but the
//! structured call sites stay cheap and a native embedder can attach one.

/// Log operations for the two session managers
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ChatRequest,
    InventoryRefresh,
    FileUpload,
    FileDelete,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ChatRequest => "chat_request",
            LogOperation::InventoryRefresh => "inventory_refresh",
            LogOperation::FileUpload => "file_upload",
            LogOperation::FileDelete => "file_delete",
        }
    }
}

pub fn log_chat_request_start(text_len: usize, has_attachment: bool) {
    tracing::info!(
        operation = LogOperation::ChatRequest.as_str(),
        text_len = text_len,
        has_attachment = has_attachment,
        "Sending chat message"
    );
}

pub fn log_chat_request_failure(error: &str) {
    tracing::warn!(
        operation = LogOperation::ChatRequest.as_str(),
        error = error,
        "Chat request failed, substituting fallback reply"
    );
}

pub fn log_inventory_refresh_result(count: usize) {
    tracing::debug!(
        operation = LogOperation::InventoryRefresh.as_str(),
        file_count = count,
        "File inventory refreshed"
    );
}

/// Refresh failures keep the last known inventory rather than clearing it
pub fn log_inventory_refresh_failure(error: &str) {
    tracing::warn!(
        operation = LogOperation::InventoryRefresh.as_str(),
        error = error,
        "File inventory refresh failed, keeping stale list"
    );
}

pub fn log_upload_start(file_name: &str, size_bytes: u64) {
    tracing::info!(
        operation = LogOperation::FileUpload.as_str(),
        file_name = file_name,
        size_bytes = size_bytes,
        "Uploading file"
    );
}

pub fn log_upload_failure(file_name: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::FileUpload.as_str(),
        file_name = file_name,
        error = error,
        "File upload failed"
    );
}

pub fn log_delete_start(file_id: &str) {
    tracing::info!(
        operation = LogOperation::FileDelete.as_str(),
        file_id = file_id,
        "Deleting file"
    );
}

pub fn log_delete_failure(file_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::FileDelete.as_str(),
        file_id = file_id,
        error = error,
        "File delete failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ChatRequest.as_str(), "chat_request");
        assert_eq!(LogOperation::InventoryRefresh.as_str(), "inventory_refresh");
        assert_eq!(LogOperation::FileUpload.as_str(), "file_upload");
        assert_eq!(LogOperation::FileDelete.as_str(), "file_delete");
    }
}
