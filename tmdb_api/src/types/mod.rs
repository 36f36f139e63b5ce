mod meta;
pub use self::meta::ApiResponse;

mod movie;
pub use self::movie::{DateMovieListResponse, DateRange, MovieID, MovieListResponse, SimpleMovie};

mod details;
pub use self::details::{
    Collection, MovieDetailsResponse, ProductionCompany, ProductionCountry, SpokenLanguage,
};

mod credits;
pub use self::credits::{Cast, Crew, MovieCreditsResponse};

mod review;
pub use self::review::{AuthorDetails, MovieReviewsResponse, Review};

mod genre;
pub use self::genre::{Genre, GenreListResponse};
