use serde::Deserialize;

pub mod genre;

pub use genre::GenreTable;

// ============================================================================
// TMDB API Types
// ============================================================================

/// One movie record from a TMDB list endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// TMDB sends an empty string or null when no synopsis exists
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// Paged list response shared by `/trending/movie/day` and `/discover/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}
