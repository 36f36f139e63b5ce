//! Cast and crew returned by `movie/{id}/credits`.

use serde::{Deserialize, Serialize};

use super::movie::MovieID;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MovieCreditsResponse {
    pub id: MovieID,
    pub cast: Vec<Cast>,
    pub crew: Vec<Crew>,
}
impl MovieCreditsResponse {
    /// Crew members credited with the given job, e.g. `Director`.
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a Crew> + 'a {
        self.crew
            .iter()
            .filter(move |member| member.job.as_deref() == Some(job))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cast {
    pub adult: bool,

    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: Option<i32>,

    pub id: i64,

    pub known_for_department: String,

    pub name: String,

    pub original_name: String,

    pub popularity: Option<f64>,

    pub profile_path: Option<String>,

    pub cast_id: i64,

    pub character: String,

    pub credit_id: String,

    /// Billing position, starting at 0.
    pub order: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Crew {
    pub adult: bool,

    pub gender: Option<i32>,

    pub id: i64,

    pub known_for_department: String,

    pub name: String,

    pub original_name: String,

    pub popularity: Option<f64>,

    pub profile_path: Option<String>,

    pub credit_id: String,

    pub department: String,

    pub job: Option<String>,
}
