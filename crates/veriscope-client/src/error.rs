use thiserror::Error;

/// Errors surfaced by the API client and the investigation controller.
///
/// Per-line decode failures are not here: a line that fails to parse is a
/// recoverable event inside the stream, logged and skipped, never an error
/// the caller sees.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid input: {0}")]
    Validation(&'static str),

    #[error("an investigation is already running")]
    AlreadyRunning,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}
