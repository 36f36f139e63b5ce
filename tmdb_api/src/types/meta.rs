use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A decoded response body together with the HTTP status it arrived with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Reads a `YYYY-MM-DD` date that TMDB sends as `""` (or `null`) when unknown.
/// Pair with `#[serde(default)]` so a missing key also reads as `None`.
pub(crate) fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
