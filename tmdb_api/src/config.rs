//! Client configuration and environment loading.

use std::time::Duration;

use url::Url;

use crate::endpoint::DEFAULT_BASE_URL;
use crate::Error;

/// Environment variable holding the TMDB bearer token.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TMDB_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "TMDB_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to construct a [`crate::Client`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer token (API read access token).
    pub api_token: String,
    /// API root. Endpoint paths are joined onto it.
    pub base_url: String,
    /// Upper bound on a single request, connection included.
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration with the production base URL and default timeout.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("tmdb_api/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Reads `TMDB_API_KEY`, `TMDB_BASE_URL` and `TMDB_TIMEOUT_SECS`.
    ///
    /// The token is required; the other two fall back to their defaults when
    /// unset, unparsable or zero.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_token = lookup(API_KEY_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Configuration(format!("{} is not set", API_KEY_ENV)))?;

        let mut config = Self::new(api_token);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV)
            .and_then(|val| val.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Checks the token and parses the base URL, normalized to end with `/`.
    pub(crate) fn validate(&self) -> Result<Url, Error> {
        if self.api_token.trim().is_empty() {
            return Err(Error::Configuration("TMDB API token is empty".to_string()));
        }

        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base).map_err(|e| {
            Error::Configuration(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base URL {:?} cannot carry a path",
                self.base_url
            )));
        }
        Ok(url)
    }
}
