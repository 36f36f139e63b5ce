//! Outbound request assembly. Pure: no I/O happens here.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use url::Url;

use crate::{endpoint::Endpoint, query::Query, Error};

/// A fully formed GET request, ready to hand to the transport.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl ApiRequest {
    /// Builds the request for `endpoint`: substitutes `path_args` into the
    /// template, joins it onto `base`, encodes `query` and sets bearer auth.
    pub fn build(
        base: &Url,
        endpoint: Endpoint,
        path_args: &[&str],
        query: &impl Query,
        api_token: &str,
    ) -> Result<Self, Error> {
        let path = endpoint.path(path_args)?;
        let url = base
            .join(&path)
            .map_err(|e| Error::RequestBuild(format!("cannot join {:?}: {}", path, e)))?;
        let url = query.add_to_url(&url);

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_token))
            .map_err(|_| {
                Error::RequestBuild("API token contains invalid header characters".to_string())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            endpoint,
            method: Method::GET,
            url,
            headers,
        })
    }

    pub(crate) fn to_reqwest(&self, http: &reqwest::Client) -> reqwest::RequestBuilder {
        http.request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone())
    }
}
