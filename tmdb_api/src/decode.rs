//! JSON decoding of response bodies.

use serde::de::DeserializeOwned;

use crate::Error;

/// Longest body excerpt written to the log when decoding fails.
const MAX_LOGGED_BODY: usize = 512;

/// Decodes `body` into `T`. Either a fully populated value or
/// [`Error::Decode`] comes back; nothing partial.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|source| {
        tracing::warn!(
            "Failed to parse TMDB response: {} | body: {}",
            source,
            truncate_body(body)
        );
        Error::Decode { status, source }
    })
}

fn truncate_body(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY {
        return body;
    }
    let mut end = MAX_LOGGED_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
