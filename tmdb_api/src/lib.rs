//! Typed async client for the TMDB v3 movie API.
//!
//! Each [`Client`] method maps to one read-only endpoint: it encodes a typed
//! query, sends a single bearer-authenticated GET and decodes the JSON body
//! into a response type from [`types`].

mod client;
mod config;
mod decode;
mod endpoint;
mod errors;
pub mod image;
mod query;
mod request;
mod transport;
pub mod types;

pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::endpoint::Endpoint;
pub use self::errors::{Error, TransportError};
pub use self::query::{
    DiscoverQuery, LanguageQuery, MonetizationType, MovieListQuery, PagedQuery, Param, Query,
    QueryCommon, SearchQuery, SortBy, WithCommon,
};
pub use self::request::ApiRequest;
pub use self::types::ApiResponse;

pub use tokio_util::sync::CancellationToken;
