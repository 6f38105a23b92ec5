use serde::{Deserialize, Serialize};

const SEED: &str = include_str!("../data/seed.json");

/// Transient display shape for the home and trending routes. Every field is
/// optional: `/trending/all/week` mixes movies and TV, and TV entries have
/// no `title`, which passes through as null.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Movie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

impl Movie {
    /// The bundled sample movie served by `GET /`.
    pub fn seed() -> anyhow::Result<Movie> {
        let movie = serde_json::from_str(SEED)?;
        Ok(movie)
    }
}

/// Body of `POST /addMovie` and `PUT /UPDATE/{id}`. Absent fields become
/// NULL columns; nothing is validated beyond JSON structure.
#[derive(Clone, Debug, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_field_for_field() {
        let movie = Movie::seed().unwrap();
        assert!(movie.title.is_some());
        assert!(movie.release_date.is_some());
        assert!(movie.overview.is_some());
    }

    #[test]
    fn payload_tolerates_missing_fields() {
        let payload: MoviePayload = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Dune"));
        assert!(payload.comment.is_none());
    }
}
