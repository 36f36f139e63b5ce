mod common;
pub use self::common::{LanguageQuery, PagedQuery, Param, Query, QueryCommon, WithCommon};

mod movie_list;
pub use self::movie_list::MovieListQuery;

mod search;
pub use self::search::SearchQuery;

mod discover;
pub use self::discover::{DiscoverQuery, MonetizationType, SortBy};
