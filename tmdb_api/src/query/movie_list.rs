use super::common::{Param, Query, QueryCommon, WithCommon, LANGUAGE, PAGE, REGION};

/// Query for the curated movie lists: now playing, popular, top rated, upcoming.
#[derive(Clone, Debug, Default)]
pub struct MovieListQuery {
    pub common: QueryCommon,
    /// ISO 3166-1 code used to filter release dates.
    pub region: Option<String>,
}

impl WithCommon for MovieListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Query for MovieListQuery {
    fn params(&self) -> Vec<(&'static str, Param<'_>)> {
        vec![
            (LANGUAGE, Param::Text(self.common.language.as_deref())),
            (PAGE, Param::Number(self.common.page)),
            (REGION, Param::Text(self.region.as_deref())),
        ]
    }
}

impl MovieListQuery {
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{common::WithCommon, MovieListQuery, Query};

    #[test]
    fn test_movie_list_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            MovieListQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/"
        );

        insta::assert_snapshot!(
            MovieListQuery::default()
                .with_region("GB")
                .with_page(3)
                .with_language("en-GB")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?language=en-GB&page=3&region=GB"
        );

        insta::assert_snapshot!(
            MovieListQuery::default()
                .with_page(-1)
                .with_region("")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/"
        );
    }
}
