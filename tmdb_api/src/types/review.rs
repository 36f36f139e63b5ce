//! User reviews returned by `movie/{id}/reviews`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::movie::MovieID;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieReviewsResponse {
    pub id: MovieID,
    pub page: i64,
    pub results: Vec<Review>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub author: String,

    pub author_details: AuthorDetails,

    /// Review text, in Markdown.
    pub content: String,

    pub created_at: DateTime<Utc>,

    /// Opaque review identifier (a hex string, not a number).
    pub id: String,

    pub updated_at: DateTime<Utc>,

    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorDetails {
    pub name: String,
    pub username: String,
    pub avatar_path: Option<String>,
    /// Score out of 10; `None` when the author left no rating.
    pub rating: Option<f64>,
}
