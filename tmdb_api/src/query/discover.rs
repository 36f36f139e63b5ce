use std::str::FromStr;

use chrono::NaiveDate;

use super::common::{
    Param, Query, QueryCommon, WithCommon, CERTIFICATION, CERTIFICATION_COUNTRY,
    CERTIFICATION_GTE, CERTIFICATION_LTE, INCLUDE_ADULT, INCLUDE_VIDEO, LANGUAGE, PAGE,
    PRIMARY_RELEASE_YEAR, PRIMARY_RELEASE_YEAR_GTE, PRIMARY_RELEASE_YEAR_LTE, REGION,
    RELEASE_DATE_GTE, RELEASE_DATE_LTE, SORT_BY, VOTE_AVERAGE_GTE, VOTE_AVERAGE_LTE,
    VOTE_COUNT_GTE, VOTE_COUNT_LTE, WATCH_REGION, WITHOUT_COMPANIES, WITHOUT_GENRES,
    WITHOUT_KEYWORDS, WITH_CAST, WITH_COMPANIES, WITH_CREW, WITH_GENRES, WITH_KEYWORDS,
    WITH_ORIGINAL_LANGUAGE, WITH_ORIGIN_COUNTRY, WITH_PEOPLE, WITH_RUNTIME_GTE,
    WITH_RUNTIME_LTE, WITH_WATCH_MONETIZATION_TYPES, WITH_WATCH_PROVIDERS, YEAR,
};

/// Filters for `discover/movie`. Every field is optional; unset fields are
/// left out of the request.
///
/// List filters are sent as one comma-joined value, which TMDB reads as AND.
/// An element may itself contain `|` to express OR (e.g. `"28|12"`).
#[derive(Clone, Debug, Default)]
pub struct DiscoverQuery {
    pub certification: Option<String>,
    pub certification_country: Option<String>,
    pub certification_gte: Option<String>,
    pub certification_lte: Option<String>,
    pub include_adult: Option<bool>,
    pub include_video: Option<bool>,
    pub common: QueryCommon,
    pub primary_release_year: Option<i32>,
    pub primary_release_year_gte: Option<i32>,
    pub primary_release_year_lte: Option<i32>,
    pub region: Option<String>,
    pub release_date_gte: Option<NaiveDate>,
    pub release_date_lte: Option<NaiveDate>,
    pub sort_by: Option<SortBy>,
    pub vote_average_gte: Option<f32>,
    pub vote_average_lte: Option<f32>,
    pub vote_count_gte: Option<f32>,
    pub vote_count_lte: Option<f32>,
    pub genres: Vec<String>,
    pub companies: Vec<String>,
    pub keywords: Vec<String>,
    pub cast: Vec<String>,
    pub crew: Vec<String>,
    pub people: Vec<String>,
    pub origin_country: Option<String>,
    pub original_language: Option<String>,
    pub watch_region: Option<String>,
    pub runtime_gte: Option<i32>,
    pub runtime_lte: Option<i32>,
    pub watch_monetization_types: Vec<MonetizationType>,
    pub watch_providers: Vec<String>,
    pub without_companies: Vec<String>,
    pub without_genres: Vec<String>,
    pub without_keywords: Vec<String>,
    pub year: Option<i32>,
}

fn list(values: &[String]) -> Param<'_> {
    Param::List(values.iter().map(String::as_str).collect())
}

impl WithCommon for DiscoverQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Query for DiscoverQuery {
    fn params(&self) -> Vec<(&'static str, Param<'_>)> {
        vec![
            (CERTIFICATION, Param::Text(self.certification.as_deref())),
            (
                CERTIFICATION_COUNTRY,
                Param::Text(self.certification_country.as_deref()),
            ),
            (CERTIFICATION_GTE, Param::Text(self.certification_gte.as_deref())),
            (CERTIFICATION_LTE, Param::Text(self.certification_lte.as_deref())),
            (INCLUDE_ADULT, Param::Flag(self.include_adult)),
            (INCLUDE_VIDEO, Param::Flag(self.include_video)),
            (LANGUAGE, Param::Text(self.common.language.as_deref())),
            (PAGE, Param::Number(self.common.page)),
            (PRIMARY_RELEASE_YEAR, Param::Number(self.primary_release_year)),
            (
                PRIMARY_RELEASE_YEAR_GTE,
                Param::Number(self.primary_release_year_gte),
            ),
            (
                PRIMARY_RELEASE_YEAR_LTE,
                Param::Number(self.primary_release_year_lte),
            ),
            (REGION, Param::Text(self.region.as_deref())),
            (RELEASE_DATE_GTE, Param::Date(self.release_date_gte)),
            (RELEASE_DATE_LTE, Param::Date(self.release_date_lte)),
            (SORT_BY, Param::Text(self.sort_by.map(|s| s.as_str()))),
            (VOTE_AVERAGE_GTE, Param::Decimal(self.vote_average_gte)),
            (VOTE_AVERAGE_LTE, Param::Decimal(self.vote_average_lte)),
            (VOTE_COUNT_GTE, Param::Decimal(self.vote_count_gte)),
            (VOTE_COUNT_LTE, Param::Decimal(self.vote_count_lte)),
            (WITH_GENRES, list(&self.genres)),
            (WITH_COMPANIES, list(&self.companies)),
            (WITH_KEYWORDS, list(&self.keywords)),
            (WITH_CAST, list(&self.cast)),
            (WITH_CREW, list(&self.crew)),
            (WITH_PEOPLE, list(&self.people)),
            (WITH_ORIGIN_COUNTRY, Param::Text(self.origin_country.as_deref())),
            (
                WITH_ORIGINAL_LANGUAGE,
                Param::Text(self.original_language.as_deref()),
            ),
            (WATCH_REGION, Param::Text(self.watch_region.as_deref())),
            (WITH_RUNTIME_GTE, Param::Number(self.runtime_gte)),
            (WITH_RUNTIME_LTE, Param::Number(self.runtime_lte)),
            (
                WITH_WATCH_MONETIZATION_TYPES,
                Param::List(
                    self.watch_monetization_types
                        .iter()
                        .map(|m| m.as_str())
                        .collect(),
                ),
            ),
            (WITH_WATCH_PROVIDERS, list(&self.watch_providers)),
            (WITHOUT_COMPANIES, list(&self.without_companies)),
            (WITHOUT_GENRES, list(&self.without_genres)),
            (WITHOUT_KEYWORDS, list(&self.without_keywords)),
            (YEAR, Param::Number(self.year)),
        ]
    }
}

impl DiscoverQuery {
    pub fn with_certification(mut self, certification: &str) -> Self {
        self.certification = Some(certification.to_string());
        self
    }
    pub fn with_certification_country(mut self, country: &str) -> Self {
        self.certification_country = Some(country.to_string());
        self
    }
    pub fn with_certification_gte(mut self, certification: &str) -> Self {
        self.certification_gte = Some(certification.to_string());
        self
    }
    pub fn with_certification_lte(mut self, certification: &str) -> Self {
        self.certification_lte = Some(certification.to_string());
        self
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }
    pub fn with_include_video(mut self, include_video: bool) -> Self {
        self.include_video = Some(include_video);
        self
    }

    pub fn with_primary_release_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }
    pub fn with_primary_release_year_gte(mut self, year: i32) -> Self {
        self.primary_release_year_gte = Some(year);
        self
    }
    pub fn with_primary_release_year_lte(mut self, year: i32) -> Self {
        self.primary_release_year_lte = Some(year);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_release_date_gte(mut self, date: NaiveDate) -> Self {
        self.release_date_gte = Some(date);
        self
    }
    pub fn with_release_date_lte(mut self, date: NaiveDate) -> Self {
        self.release_date_lte = Some(date);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn with_vote_average_gte(mut self, vote_average: f32) -> Self {
        self.vote_average_gte = Some(vote_average);
        self
    }
    pub fn with_vote_average_lte(mut self, vote_average: f32) -> Self {
        self.vote_average_lte = Some(vote_average);
        self
    }
    pub fn with_vote_count_gte(mut self, vote_count: f32) -> Self {
        self.vote_count_gte = Some(vote_count);
        self
    }
    pub fn with_vote_count_lte(mut self, vote_count: f32) -> Self {
        self.vote_count_lte = Some(vote_count);
        self
    }

    pub fn with_genre(mut self, genre_id: &str) -> Self {
        self.genres.push(genre_id.to_string());
        self
    }
    pub fn with_genres(mut self, genre_ids: &[String]) -> Self {
        self.genres.extend_from_slice(genre_ids);
        self
    }

    pub fn with_company(mut self, company_id: &str) -> Self {
        self.companies.push(company_id.to_string());
        self
    }
    pub fn with_companies(mut self, company_ids: &[String]) -> Self {
        self.companies.extend_from_slice(company_ids);
        self
    }

    pub fn with_keyword(mut self, keyword_id: &str) -> Self {
        self.keywords.push(keyword_id.to_string());
        self
    }
    pub fn with_keywords(mut self, keyword_ids: &[String]) -> Self {
        self.keywords.extend_from_slice(keyword_ids);
        self
    }

    pub fn with_cast_member(mut self, person_id: &str) -> Self {
        self.cast.push(person_id.to_string());
        self
    }
    pub fn with_cast(mut self, person_ids: &[String]) -> Self {
        self.cast.extend_from_slice(person_ids);
        self
    }

    pub fn with_crew_member(mut self, person_id: &str) -> Self {
        self.crew.push(person_id.to_string());
        self
    }
    pub fn with_crew(mut self, person_ids: &[String]) -> Self {
        self.crew.extend_from_slice(person_ids);
        self
    }

    pub fn with_person(mut self, person_id: &str) -> Self {
        self.people.push(person_id.to_string());
        self
    }
    pub fn with_people(mut self, person_ids: &[String]) -> Self {
        self.people.extend_from_slice(person_ids);
        self
    }

    pub fn with_origin_country(mut self, country: &str) -> Self {
        self.origin_country = Some(country.to_string());
        self
    }
    pub fn with_original_language(mut self, language: &str) -> Self {
        self.original_language = Some(language.to_string());
        self
    }
    pub fn with_watch_region(mut self, region: &str) -> Self {
        self.watch_region = Some(region.to_string());
        self
    }

    pub fn with_runtime_gte(mut self, minutes: i32) -> Self {
        self.runtime_gte = Some(minutes);
        self
    }
    pub fn with_runtime_lte(mut self, minutes: i32) -> Self {
        self.runtime_lte = Some(minutes);
        self
    }

    pub fn with_watch_monetization_type(mut self, monetization: MonetizationType) -> Self {
        self.watch_monetization_types.push(monetization);
        self
    }
    pub fn with_watch_monetization_types(mut self, monetizations: &[MonetizationType]) -> Self {
        self.watch_monetization_types.extend_from_slice(monetizations);
        self
    }

    pub fn with_watch_provider(mut self, provider_id: &str) -> Self {
        self.watch_providers.push(provider_id.to_string());
        self
    }
    pub fn with_watch_providers(mut self, provider_ids: &[String]) -> Self {
        self.watch_providers.extend_from_slice(provider_ids);
        self
    }

    pub fn without_company(mut self, company_id: &str) -> Self {
        self.without_companies.push(company_id.to_string());
        self
    }
    pub fn without_genre(mut self, genre_id: &str) -> Self {
        self.without_genres.push(genre_id.to_string());
        self
    }
    pub fn without_keyword(mut self, keyword_id: &str) -> Self {
        self.without_keywords.push(keyword_id.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Sort order accepted by `discover/movie`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    PopularityAsc,
    PopularityDesc,
    PrimaryReleaseDateAsc,
    PrimaryReleaseDateDesc,
    OriginalTitleAsc,
    OriginalTitleDesc,
    RevenueAsc,
    RevenueDesc,
    TitleAsc,
    TitleDesc,
    VoteAverageAsc,
    VoteAverageDesc,
    VoteCountAsc,
    VoteCountDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 14] = [
        SortBy::PopularityAsc,
        SortBy::PopularityDesc,
        SortBy::PrimaryReleaseDateAsc,
        SortBy::PrimaryReleaseDateDesc,
        SortBy::OriginalTitleAsc,
        SortBy::OriginalTitleDesc,
        SortBy::RevenueAsc,
        SortBy::RevenueDesc,
        SortBy::TitleAsc,
        SortBy::TitleDesc,
        SortBy::VoteAverageAsc,
        SortBy::VoteAverageDesc,
        SortBy::VoteCountAsc,
        SortBy::VoteCountDesc,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortBy::PopularityAsc => "popularity.asc",
            SortBy::PopularityDesc => "popularity.desc",
            SortBy::PrimaryReleaseDateAsc => "primary_release_date.asc",
            SortBy::PrimaryReleaseDateDesc => "primary_release_date.desc",
            SortBy::OriginalTitleAsc => "original_title.asc",
            SortBy::OriginalTitleDesc => "original_title.desc",
            SortBy::RevenueAsc => "revenue.asc",
            SortBy::RevenueDesc => "revenue.desc",
            SortBy::TitleAsc => "title.asc",
            SortBy::TitleDesc => "title.desc",
            SortBy::VoteAverageAsc => "vote_average.asc",
            SortBy::VoteAverageDesc => "vote_average.desc",
            SortBy::VoteCountAsc => "vote_count.asc",
            SortBy::VoteCountDesc => "vote_count.desc",
        }
    }
}
impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort_by| sort_by.as_str() == s)
            .ok_or(())
    }
}

/// How a title is offered by a watch provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonetizationType {
    Flatrate,
    Free,
    Ads,
    Rent,
    Buy,
}

impl MonetizationType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MonetizationType::Flatrate => "flatrate",
            MonetizationType::Free => "free",
            MonetizationType::Ads => "ads",
            MonetizationType::Rent => "rent",
            MonetizationType::Buy => "buy",
        }
    }
}
impl std::fmt::Display for MonetizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for MonetizationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flatrate" => Ok(MonetizationType::Flatrate),
            "free" => Ok(MonetizationType::Free),
            "ads" => Ok(MonetizationType::Ads),
            "rent" => Ok(MonetizationType::Rent),
            "buy" => Ok(MonetizationType::Buy),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use url::Url;

    use crate::query::{common::WithCommon, DiscoverQuery, MonetizationType, Query, SortBy};

    #[test]
    fn test_discover_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            DiscoverQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/"
        );

        insta::assert_snapshot!(
            DiscoverQuery::default()
                .with_sort_by(SortBy::VoteAverageDesc)
                .with_vote_count_gte(200.0)
                .with_vote_average_gte(7.0)
                .with_genre("18")
                .with_genre("80")
                .with_page(2)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?page=2&sort_by=vote_average.desc&vote_average.gte=7.0&vote_count.gte=200.0&with_genres=18%2C80"
        );

        insta::assert_snapshot!(
            DiscoverQuery::default()
                .with_certification_country("US")
                .with_certification_lte("PG-13")
                .with_include_adult(false)
                .with_release_date_gte(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
                .with_release_date_lte(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap())
                .with_watch_region("US")
                .with_watch_monetization_types(&[MonetizationType::Flatrate, MonetizationType::Free])
                .with_runtime_gte(90)
                .with_runtime_lte(0)
                .without_genre("27")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?certification_country=US&certification.lte=PG-13&include_adult=false&release_date.gte=2020-01-01&release_date.lte=2020-12-31&watch_region=US&with_runtime.gte=90&with_watch_monetization_types=flatrate%2Cfree&without_genres=27"
        );
    }

    #[test]
    fn test_sort_by_tokens() {
        assert_eq!(SortBy::ALL.len(), 14);
        for sort_by in SortBy::ALL {
            assert_eq!(SortBy::from_str(sort_by.as_str()), Ok(sort_by));
        }
        assert_eq!(SortBy::PrimaryReleaseDateDesc.to_string(), "primary_release_date.desc");
        assert!(SortBy::from_str("popularity").is_err());
    }

    #[test]
    fn test_monetization_tokens() {
        assert_eq!(MonetizationType::from_str("ads"), Ok(MonetizationType::Ads));
        assert_eq!(MonetizationType::Buy.to_string(), "buy");
        assert!(MonetizationType::from_str("stream").is_err());
    }
}
