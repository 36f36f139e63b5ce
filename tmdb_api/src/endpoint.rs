//! Endpoint catalog: operation name to URL template.

use crate::Error;

/// Default base URL for the TMDB v3 API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Slot replaced by a path argument inside a template.
const PLACEHOLDER: &str = "{}";

/// A read-only TMDB endpoint. Every endpoint is fetched with `GET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
    SearchMovies,
    SimilarMovies,
    MovieCredits,
    MovieDetails,
    MovieReviews,
    GenreList,
    DiscoverMovies,
}

impl Endpoint {
    /// Path template relative to the API base URL. `{}` marks a path argument.
    pub const fn template(&self) -> &'static str {
        match self {
            Endpoint::NowPlaying => "movie/now_playing",
            Endpoint::Popular => "movie/popular",
            Endpoint::TopRated => "movie/top_rated",
            Endpoint::Upcoming => "movie/upcoming",
            Endpoint::SearchMovies => "search/movie",
            Endpoint::SimilarMovies => "movie/{}/similar",
            Endpoint::MovieCredits => "movie/{}/credits",
            Endpoint::MovieDetails => "movie/{}",
            Endpoint::MovieReviews => "movie/{}/reviews",
            Endpoint::GenreList => "genre/movie/list",
            Endpoint::DiscoverMovies => "discover/movie",
        }
    }

    /// Substitutes `args` positionally into the template.
    ///
    /// Fails with [`Error::RequestBuild`] when the number of arguments does not
    /// match the number of slots.
    pub fn path(&self, args: &[&str]) -> Result<String, Error> {
        let template = self.template();
        let slots = template.matches(PLACEHOLDER).count();
        if slots != args.len() {
            return Err(Error::RequestBuild(format!(
                "{:?} expects {} path argument(s), got {}",
                self,
                slots,
                args.len()
            )));
        }

        let mut path = String::with_capacity(template.len() + 8);
        let mut rest = template;
        for arg in args {
            if let Some((head, tail)) = rest.split_once(PLACEHOLDER) {
                path.push_str(head);
                path.push_str(arg);
                rest = tail;
            }
        }
        path.push_str(rest);
        Ok(path)
    }
}
