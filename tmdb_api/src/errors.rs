//! Error types for the API client.

use serde::Deserialize;

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client could not be constructed (empty credential, bad base URL).
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
    /// The outbound request could not be assembled from the endpoint template.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),
    /// The request never completed (network error, timeout or cancellation).
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),
    /// The API answered with a status other than 200.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body of a 200 response did not match the expected shape.
    #[error("Failed to parse response body")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a request could not be completed.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("request cancelled")]
    Cancelled,
}

/// TMDB's JSON error envelope, e.g. `{"status_code": 34, "status_message": "..."}`.
#[derive(Deserialize)]
struct StatusEnvelope {
    status_code: i32,
    status_message: String,
}

impl Error {
    /// Returns the HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body of a non-200 response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Returns TMDB's own status code and message for a non-200 response,
    /// when the body carries the standard error envelope.
    pub fn status_message(&self) -> Option<(i32, String)> {
        let envelope = serde_json::from_str::<StatusEnvelope>(self.body()?).ok()?;
        Some((envelope.status_code, envelope.status_message))
    }

    /// True when the call was aborted through its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Cancelled))
    }
}
