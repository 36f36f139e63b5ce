//! Full movie record returned by `movie/{id}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{genre::Genre, meta::empty_date_as_none, movie::MovieID};
use crate::image;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieDetailsResponse {
    pub adult: bool,

    pub backdrop_path: Option<String>,

    /// The franchise this movie is part of, if any.
    pub belongs_to_collection: Option<Collection>,

    /// Budget in US dollars. TMDB reports `0` when unknown.
    pub budget: Option<i64>,

    pub genres: Vec<Genre>,

    pub homepage: Option<String>,

    pub id: MovieID,

    pub imdb_id: Option<String>,

    pub original_language: String,

    pub original_title: String,

    pub overview: String,

    pub popularity: Option<f64>,

    pub poster_path: Option<String>,

    pub production_companies: Vec<ProductionCompany>,

    pub production_countries: Vec<ProductionCountry>,

    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,

    pub revenue: Option<i64>,

    /// Runtime in minutes.
    pub runtime: Option<i64>,

    pub spoken_languages: Vec<SpokenLanguage>,

    /// Release status, e.g. `Released` or `Post Production`.
    pub status: String,

    pub tagline: Option<String>,

    pub title: String,

    pub video: Option<bool>,

    pub vote_average: Option<f64>,

    pub vote_count: Option<i64>,
}
impl MovieDetailsResponse {
    pub fn poster_url(&self, width: u32) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image::sized_url(width, path))
    }

    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://www.imdb.com/title/{}/", id))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub logo_path: Option<String>,
    pub name: String,
    pub origin_country: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 alpha-2 country code.
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub english_name: String,
    /// ISO 639-1 language code.
    pub iso_639_1: String,
    pub name: String,
}
