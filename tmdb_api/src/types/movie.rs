//! Movie list types shared by the list, search, similar and discover endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meta::empty_date_as_none;
use crate::image;

/// Numeric TMDB movie identifier.
pub type MovieID = i64;

/// A movie as it appears inside list results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimpleMovie {
    pub adult: bool,

    pub backdrop_path: Option<String>,

    pub genre_ids: Vec<i64>,

    pub id: MovieID,

    pub original_language: String,

    pub original_title: String,

    pub overview: String,

    pub popularity: Option<f64>,

    pub poster_path: Option<String>,

    /// `None` when TMDB has no release date on record.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,

    pub title: String,

    pub video: bool,

    pub vote_average: Option<f64>,

    pub vote_count: Option<i64>,
}
impl SimpleMovie {
    /// Poster URL at the given width, if the movie has a poster.
    pub fn poster_url(&self, width: u32) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image::sized_url(width, path))
    }

    /// Backdrop URL at original resolution, if the movie has a backdrop.
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path.as_deref().map(image::original_url)
    }
}

/// A page of movies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub page: i64,
    pub results: Vec<SimpleMovie>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// A page of movies bounded by a release window (now playing, upcoming).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DateMovieListResponse {
    pub dates: DateRange,
    pub page: i64,
    pub results: Vec<SimpleMovie>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// Inclusive release window.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange {
    pub maximum: NaiveDate,
    pub minimum: NaiveDate,
}
impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.minimum <= date && date <= self.maximum
    }
}
