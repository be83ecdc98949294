use thiserror::Error;

/// Errors from the subtitle API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        request_id: Option<String>,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid URL: {0}")]
    Url(String),
}

/// Local message for a status code when the response body carries none.
pub(crate) fn fallback_message(status: u16) -> String {
    match status {
        400 => "invalid request".into(),
        401 => "invalid API key".into(),
        403 => "access denied or download limit reached".into(),
        404 => "subtitle not found".into(),
        429 => "too many requests, try again later".into(),
        500 => "server error, try again later".into(),
        other => format!("unknown API error (status {other})"),
    }
}
