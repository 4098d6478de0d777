use thiserror::Error;

/// Failures surfaced by the backend client. None of these are fatal; views
/// render them as a failed-to-load branch and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication required")]
    AuthRequired,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}
