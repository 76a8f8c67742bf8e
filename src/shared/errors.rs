use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_status() {
        let err = AppError::Http {
            status: 404,
            detail: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
