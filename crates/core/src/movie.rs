use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::MovieId;
use crate::validation::{lenient_text, FieldChecker, Validate, ValidationErrors};

/// Complete set of movie columns except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    /// Running time in minutes.
    pub duration: i32,
}

/// A stored movie row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: NewMovie,
}

/// Write payload for `POST /api/movies` and `PUT /api/movies/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieInput {
    pub title: Option<String>,
    pub director: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub year: Option<String>,
    pub color: Option<String>,
    pub duration: Option<i32>,
}

impl Validate for MovieInput {
    type Output = NewMovie;

    fn validate(self) -> Result<NewMovie, ValidationErrors> {
        let mut checker = FieldChecker::new();
        let movie = NewMovie {
            title: checker.text("title", self.title),
            director: checker.text("director", self.director),
            year: checker.text("year", self.year),
            color: checker.text("color", self.color),
            duration: checker.value("duration", self.duration),
        };
        checker.finish(movie)
    }
}

/// Query filters for `GET /api/movies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieFilter {
    /// Exact match on `color`.
    pub color: Option<String>,
    /// Upper bound (inclusive) on `duration`.
    pub max_duration: Option<i32>,
}

impl Entity for Movie {
    type Id = MovieId;
    type Fields = NewMovie;
    type Filter = MovieFilter;

    const KIND: &'static str = "movie";
    const COLLECTION: &'static str = "movies";

    fn from_parts(id: MovieId, fields: NewMovie) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> &MovieId {
        &self.id
    }

    fn fields(&self) -> &NewMovie {
        &self.fields
    }

    fn matches(&self, filter: &MovieFilter) -> bool {
        filter.color.as_deref().is_none_or(|c| self.fields.color == c)
            && filter.max_duration.is_none_or(|max| self.fields.duration <= max)
    }
}
