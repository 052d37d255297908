use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie as returned by `GET /movies`.
///
/// The JSON keys are the ones existing clients of the service already consume,
/// hence the mixed casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "MovieName")]
    pub name: String,
    #[serde(rename = "About")]
    pub synopsis: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Hours")]
    pub runtime_hours: i64,
    #[serde(rename = "lang")]
    pub languages: Vec<String>,
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
}

/// Raw `movies` row. `lang` and `genre` hold the serialized list text.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub movie_name: String,
    pub about: String,
    pub rating: f64,
    pub hours: i64,
    pub lang: String,
    pub genre: String,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            name: row.movie_name,
            synopsis: row.about,
            rating: row.rating,
            runtime_hours: row.hours,
            languages: parse_list(&row.lang),
            genres: parse_list(&row.genre),
        }
    }
}

/// Splits a comma separated column value into its trimmed parts.
///
/// Accepts both plain text (`English, Hindi`) and the PostgreSQL array
/// literal form (`{English,"Hindi"}`).
pub fn parse_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|part| part.trim().trim_matches('"').trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
