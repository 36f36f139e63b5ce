use super::common::{
    Param, Query, QueryCommon, WithCommon, INCLUDE_ADULT, LANGUAGE, PAGE, PRIMARY_RELEASE_YEAR,
    QUERY, REGION, YEAR,
};

/// Query for `search/movie`. The search text is required and always sent.
#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub query: String,
    pub include_adult: Option<bool>,
    pub common: QueryCommon,
    pub primary_release_year: Option<i32>,
    pub region: Option<String>,
    pub year: Option<i32>,
}

impl WithCommon for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Query for SearchQuery {
    fn params(&self) -> Vec<(&'static str, Param<'_>)> {
        vec![
            (QUERY, Param::Required(self.query.as_str())),
            (INCLUDE_ADULT, Param::Flag(self.include_adult)),
            (LANGUAGE, Param::Text(self.common.language.as_deref())),
            (PRIMARY_RELEASE_YEAR, Param::Number(self.primary_release_year)),
            (PAGE, Param::Number(self.common.page)),
            (REGION, Param::Text(self.region.as_deref())),
            (YEAR, Param::Number(self.year)),
        ]
    }
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = Some(include_adult);
        self
    }

    pub fn with_primary_release_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}
