use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Response of `genre/movie/list`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}
impl GenreListResponse {
    /// Looks up a genre name by id.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.genres
            .iter()
            .find(|genre| genre.id == id)
            .map(|genre| genre.name.as_str())
    }
}
