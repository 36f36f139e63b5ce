//! HTTP client for the TMDB v3 API.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    config::ClientConfig,
    decode::decode,
    endpoint::Endpoint,
    query::{DiscoverQuery, LanguageQuery, MovieListQuery, PagedQuery, Query, SearchQuery},
    request::ApiRequest,
    transport,
    types::{
        ApiResponse, DateMovieListResponse, GenreListResponse, MovieCreditsResponse,
        MovieDetailsResponse, MovieID, MovieListResponse, MovieReviewsResponse,
    },
    Error,
};

/// HTTP client for the TMDB v3 API.
///
/// Holds the bearer token and a pooled `reqwest::Client`, both fixed at
/// construction. Cheap to share: every method takes `&self` and calls on the
/// same client may run concurrently.
///
/// Every method takes a [`CancellationToken`] first. Cancelling it aborts the
/// in-flight request and the call returns [`Error::Transport`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production TMDB API.
    ///
    /// Fails with [`Error::Configuration`] if `api_token` is empty.
    pub fn new(api_token: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_token))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_token: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(api_token).with_base_url(base_url))
    }

    /// Creates a client from a full configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let base_url = config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url,
            api_token: config.api_token,
        })
    }

    /// Creates a client from `TMDB_API_KEY` and friends. See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the request for `endpoint` without sending it.
    pub fn request<Q: Query>(
        &self,
        endpoint: Endpoint,
        path_args: &[&str],
        query: &Q,
    ) -> Result<ApiRequest, Error> {
        ApiRequest::build(&self.base_url, endpoint, path_args, query, &self.api_token)
    }

    async fn get<T, Q>(
        &self,
        cancel: &CancellationToken,
        endpoint: Endpoint,
        path_args: &[&str],
        query: &Q,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let request = self.request(endpoint, path_args, query)?;
        let (status, body) = transport::send(&self.http, &request, cancel)
            .await
            .into_body()?;
        let data = decode::<T>(status, &body)?;
        Ok(ApiResponse { status, data })
    }

    /// Movies currently in theatres.
    pub async fn now_playing(
        &self,
        cancel: &CancellationToken,
        query: &MovieListQuery,
    ) -> Result<ApiResponse<DateMovieListResponse>, Error> {
        self.get(cancel, Endpoint::NowPlaying, &[], query).await
    }

    /// Movies ordered by popularity.
    pub async fn popular(
        &self,
        cancel: &CancellationToken,
        query: &MovieListQuery,
    ) -> Result<ApiResponse<MovieListResponse>, Error> {
        self.get(cancel, Endpoint::Popular, &[], query).await
    }

    /// Movies ordered by rating.
    pub async fn top_rated(
        &self,
        cancel: &CancellationToken,
        query: &MovieListQuery,
    ) -> Result<ApiResponse<MovieListResponse>, Error> {
        self.get(cancel, Endpoint::TopRated, &[], query).await
    }

    /// Movies being released soon.
    pub async fn upcoming(
        &self,
        cancel: &CancellationToken,
        query: &MovieListQuery,
    ) -> Result<ApiResponse<DateMovieListResponse>, Error> {
        self.get(cancel, Endpoint::Upcoming, &[], query).await
    }

    /// Searches movies by original, translated and alternative titles.
    pub async fn search_movies(
        &self,
        cancel: &CancellationToken,
        query: &SearchQuery,
    ) -> Result<ApiResponse<MovieListResponse>, Error> {
        self.get(cancel, Endpoint::SearchMovies, &[], query).await
    }

    /// Movies similar to `movie_id`, by keywords and genres.
    pub async fn similar_movies(
        &self,
        cancel: &CancellationToken,
        movie_id: MovieID,
        query: &PagedQuery,
    ) -> Result<ApiResponse<MovieListResponse>, Error> {
        let id = movie_id.to_string();
        self.get(cancel, Endpoint::SimilarMovies, &[&id], query).await
    }

    /// Cast and crew of `movie_id`.
    pub async fn movie_credits(
        &self,
        cancel: &CancellationToken,
        movie_id: MovieID,
        query: &LanguageQuery,
    ) -> Result<ApiResponse<MovieCreditsResponse>, Error> {
        let id = movie_id.to_string();
        self.get(cancel, Endpoint::MovieCredits, &[&id], query).await
    }

    /// Primary information about `movie_id`.
    pub async fn movie_details(
        &self,
        cancel: &CancellationToken,
        movie_id: MovieID,
        query: &LanguageQuery,
    ) -> Result<ApiResponse<MovieDetailsResponse>, Error> {
        let id = movie_id.to_string();
        self.get(cancel, Endpoint::MovieDetails, &[&id], query).await
    }

    /// User reviews of `movie_id`.
    pub async fn movie_reviews(
        &self,
        cancel: &CancellationToken,
        movie_id: MovieID,
        query: &PagedQuery,
    ) -> Result<ApiResponse<MovieReviewsResponse>, Error> {
        let id = movie_id.to_string();
        self.get(cancel, Endpoint::MovieReviews, &[&id], query).await
    }

    /// The official list of movie genres.
    pub async fn genre_list(
        &self,
        cancel: &CancellationToken,
        query: &LanguageQuery,
    ) -> Result<ApiResponse<GenreListResponse>, Error> {
        self.get(cancel, Endpoint::GenreList, &[], query).await
    }

    /// Finds movies matching a set of filters and a sort order.
    pub async fn discover_movies(
        &self,
        cancel: &CancellationToken,
        query: &DiscoverQuery,
    ) -> Result<ApiResponse<MovieListResponse>, Error> {
        self.get(cancel, Endpoint::DiscoverMovies, &[], query).await
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use crate::Error;

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(Client::new(""), Err(Error::Configuration(_))));
        assert!(matches!(
            Client::with_base_url("http://localhost:1234", " "),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn debug_hides_token() {
        let client = Client::new("very-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("api.themoviedb.org"));
    }
}
