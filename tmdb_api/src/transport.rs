//! Issues a built request and classifies the outcome. Never retries.

use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

use crate::{errors::TransportError, request::ApiRequest, Error};

/// Result of one transport attempt.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// The call completed with status 200.
    Success { status: u16, body: String },
    /// The call completed with any other status.
    StatusFailure { status: u16, body: String },
    /// The call did not complete.
    TransportFailure(TransportError),
}

impl Outcome {
    /// Converts the outcome into the body of a 200 response or an [`Error`].
    pub(crate) fn into_body(self) -> Result<(u16, String), Error> {
        match self {
            Outcome::Success { status, body } => Ok((status, body)),
            Outcome::StatusFailure { status, body } => Err(Error::HttpStatus { status, body }),
            Outcome::TransportFailure(e) => Err(Error::Transport(e)),
        }
    }
}

/// Sends `request`, aborting as soon as `cancel` fires.
pub(crate) async fn send(
    http: &reqwest::Client,
    request: &ApiRequest,
    cancel: &CancellationToken,
) -> Outcome {
    tracing::debug!(endpoint = ?request.endpoint, url = %request.url, "TMDB API request");

    let exchange = async {
        let resp = request.to_reqwest(http).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok::<_, reqwest::Error>((status, body))
    };

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::warn!(endpoint = ?request.endpoint, "TMDB API request cancelled");
            return Outcome::TransportFailure(TransportError::Cancelled);
        }
        result = exchange => result,
    };

    match result {
        Ok((status, body)) if status == StatusCode::OK => {
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "TMDB API response");
            Outcome::Success {
                status: status.as_u16(),
                body,
            }
        }
        Ok((status, body)) => {
            tracing::warn!(
                endpoint = ?request.endpoint,
                status = status.as_u16(),
                "TMDB API request failed with status {}",
                status
            );
            Outcome::StatusFailure {
                status: status.as_u16(),
                body,
            }
        }
        Err(e) => {
            tracing::warn!(endpoint = ?request.endpoint, "TMDB API request failed: {}", e);
            Outcome::TransportFailure(TransportError::Http(e))
        }
    }
}
