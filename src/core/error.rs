use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// A superseded request is deliberately *not* represented here: dropping a
/// stale in-flight result is a silent outcome of the orchestrator, observable
/// through its discard counter, not an error condition.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The request failed before any response arrived (DNS, connect, timeout,
    /// or a dropped connection while reading the body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `message` field of the error body when present, otherwise the
        /// status code's canonical reason text.
        message: String,
    },

    /// The response body was not the expected article-page shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Query parameters violated a constraint (page >= 1, pageSize > 0).
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
