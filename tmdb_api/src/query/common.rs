//! Shared query infrastructure: the [`Query`] trait, the [`Param`] table entry,
//! [`QueryCommon`] fields, and the query keys understood by TMDB.

use chrono::NaiveDate;
use url::Url;

pub(crate) const QUERY: &str = "query";
pub(crate) const INCLUDE_ADULT: &str = "include_adult";
pub(crate) const INCLUDE_VIDEO: &str = "include_video";
pub(crate) const PAGE: &str = "page";
pub(crate) const LANGUAGE: &str = "language";
pub(crate) const REGION: &str = "region";
pub(crate) const YEAR: &str = "year";
pub(crate) const PRIMARY_RELEASE_YEAR: &str = "primary_release_year";
pub(crate) const PRIMARY_RELEASE_YEAR_GTE: &str = "primary_release_year.gte";
pub(crate) const PRIMARY_RELEASE_YEAR_LTE: &str = "primary_release_year.lte";
pub(crate) const CERTIFICATION: &str = "certification";
pub(crate) const CERTIFICATION_COUNTRY: &str = "certification_country";
pub(crate) const CERTIFICATION_GTE: &str = "certification.gte";
pub(crate) const CERTIFICATION_LTE: &str = "certification.lte";
pub(crate) const RELEASE_DATE_GTE: &str = "release_date.gte";
pub(crate) const RELEASE_DATE_LTE: &str = "release_date.lte";
pub(crate) const SORT_BY: &str = "sort_by";
pub(crate) const VOTE_AVERAGE_GTE: &str = "vote_average.gte";
pub(crate) const VOTE_AVERAGE_LTE: &str = "vote_average.lte";
pub(crate) const VOTE_COUNT_GTE: &str = "vote_count.gte";
pub(crate) const VOTE_COUNT_LTE: &str = "vote_count.lte";
pub(crate) const WITH_GENRES: &str = "with_genres";
pub(crate) const WITH_COMPANIES: &str = "with_companies";
pub(crate) const WITH_KEYWORDS: &str = "with_keywords";
pub(crate) const WITH_CAST: &str = "with_cast";
pub(crate) const WITH_CREW: &str = "with_crew";
pub(crate) const WITH_PEOPLE: &str = "with_people";
pub(crate) const WITH_ORIGIN_COUNTRY: &str = "with_origin_country";
pub(crate) const WITH_ORIGINAL_LANGUAGE: &str = "with_original_language";
pub(crate) const WATCH_REGION: &str = "watch_region";
pub(crate) const WITH_RUNTIME_GTE: &str = "with_runtime.gte";
pub(crate) const WITH_RUNTIME_LTE: &str = "with_runtime.lte";
pub(crate) const WITH_WATCH_MONETIZATION_TYPES: &str = "with_watch_monetization_types";
pub(crate) const WITH_WATCH_PROVIDERS: &str = "with_watch_providers";
pub(crate) const WITHOUT_COMPANIES: &str = "without_companies";
pub(crate) const WITHOUT_GENRES: &str = "without_genres";
pub(crate) const WITHOUT_KEYWORDS: &str = "without_keywords";

/// A single typed query value. Each variant carries its own "unset" rule and
/// wire format, applied by [`Param::encode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Param<'a> {
    /// Always sent, even when empty.
    Required(&'a str),
    /// Omitted when `None` or empty.
    Text(Option<&'a str>),
    /// Omitted when `None` or not positive. Sent as a plain decimal.
    Number(Option<i32>),
    /// Omitted when `None` or not positive. Sent with one decimal place.
    Decimal(Option<f32>),
    /// Omitted when `None`. Sent as `true` / `false`.
    Flag(Option<bool>),
    /// Omitted when `None`. Sent as `YYYY-MM-DD`.
    Date(Option<NaiveDate>),
    /// Omitted when empty. Elements are joined with `,` into one value.
    List(Vec<&'a str>),
}

impl Param<'_> {
    /// Returns the wire value, or `None` when the parameter must be omitted.
    pub fn encode(&self) -> Option<String> {
        match self {
            Param::Required(value) => Some((*value).to_string()),
            Param::Text(value) => value.filter(|v| !v.is_empty()).map(str::to_string),
            Param::Number(value) => value.filter(|v| *v > 0).map(|v| v.to_string()),
            Param::Decimal(value) => value.filter(|v| *v > 0.0).map(|v| format!("{:.1}", v)),
            Param::Flag(value) => value.map(|v| v.to_string()),
            Param::Date(value) => value.map(|v| v.format("%Y-%m-%d").to_string()),
            Param::List(values) if values.is_empty() => None,
            Param::List(values) => Some(values.join(",")),
        }
    }
}

/// Trait implemented by all query builders. Each builder describes its
/// parameters as an ordered table; [`Query::add_to_url`] encodes the table.
pub trait Query {
    /// The ordered `(key, value)` table for this query.
    fn params(&self) -> Vec<(&'static str, Param<'_>)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs: Vec<(&'static str, String)> = self
            .params()
            .into_iter()
            .filter_map(|(key, param)| param.encode().map(|value| (key, value)))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

/// Fields shared by most queries: response language and page number.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// ISO 639-1 language with optional region, e.g. `en-US`.
    pub language: Option<String>,
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<i32>,
}

/// Builder methods available on every query that carries [`QueryCommon`].
pub trait WithCommon: Sized {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the response language.
    fn with_language(mut self, language: &str) -> Self {
        self.get_common().language = Some(language.to_string());
        self
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i32) -> Self {
        self.get_common().page = Some(page);
        self
    }
}

/// Query for endpoints that only accept `language`.
#[derive(Clone, Debug, Default)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

impl LanguageQuery {
    pub fn new(language: &str) -> Self {
        Self {
            language: Some(language.to_string()),
        }
    }
}

impl Query for LanguageQuery {
    fn params(&self) -> Vec<(&'static str, Param<'_>)> {
        vec![(LANGUAGE, Param::Text(self.language.as_deref()))]
    }
}

/// Query for paged per-movie endpoints (similar movies, reviews).
#[derive(Clone, Debug, Default)]
pub struct PagedQuery {
    pub common: QueryCommon,
}

impl WithCommon for PagedQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Query for PagedQuery {
    fn params(&self) -> Vec<(&'static str, Param<'_>)> {
        vec![
            (LANGUAGE, Param::Text(self.common.language.as_deref())),
            (PAGE, Param::Number(self.common.page)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use super::{LanguageQuery, PagedQuery, Param, Query, WithCommon};

    #[test]
    fn unset_values_are_omitted() {
        assert_eq!(Param::Text(None).encode(), None);
        assert_eq!(Param::Text(Some("")).encode(), None);
        assert_eq!(Param::Number(None).encode(), None);
        assert_eq!(Param::Number(Some(0)).encode(), None);
        assert_eq!(Param::Number(Some(-3)).encode(), None);
        assert_eq!(Param::Decimal(Some(0.0)).encode(), None);
        assert_eq!(Param::Decimal(Some(-1.5)).encode(), None);
        assert_eq!(Param::Flag(None).encode(), None);
        assert_eq!(Param::Date(None).encode(), None);
        assert_eq!(Param::List(vec![]).encode(), None);
    }

    #[test]
    fn set_values_are_formatted() {
        assert_eq!(Param::Required("").encode().as_deref(), Some(""));
        assert_eq!(Param::Text(Some("en-US")).encode().as_deref(), Some("en-US"));
        assert_eq!(Param::Number(Some(2024)).encode().as_deref(), Some("2024"));
        assert_eq!(Param::Decimal(Some(7.0)).encode().as_deref(), Some("7.0"));
        assert_eq!(Param::Decimal(Some(8.04)).encode().as_deref(), Some("8.0"));
        assert_eq!(Param::Flag(Some(false)).encode().as_deref(), Some("false"));
        assert_eq!(
            Param::Date(NaiveDate::from_ymd_opt(2024, 3, 9)).encode().as_deref(),
            Some("2024-03-09")
        );
        assert_eq!(
            Param::List(vec!["a", "b", "c"]).encode().as_deref(),
            Some("a,b,c")
        );
    }

    #[test]
    fn test_language_and_paged_queries() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            LanguageQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/"
        );
        insta::assert_snapshot!(
            LanguageQuery::new("fr-FR").add_to_url(&url).to_string(),
            @"https://example.com/?language=fr-FR"
        );
        insta::assert_snapshot!(
            PagedQuery::default()
                .with_language("en-US")
                .with_page(2)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?language=en-US&page=2"
        );
        insta::assert_snapshot!(
            PagedQuery::default().with_page(0).add_to_url(&url).to_string(),
            @"https://example.com/"
        );
    }
}
