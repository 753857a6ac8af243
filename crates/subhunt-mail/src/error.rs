use thiserror::Error;

/// Failure talking to the mail service.
///
/// Fatal when returned from a search, recoverable (message skipped) when
/// returned from a per-message fetch.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[cfg(feature = "gmail")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unavailable(String),
}
