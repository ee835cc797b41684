use std::collections::HashMap;

/// TMDB movie genre identifiers keyed by canonical name (lowercase, letters only)
const TMDB_MOVIE_GENRES: &[(&str, u32)] = &[
    ("action", 28),
    ("adventure", 12),
    ("animation", 16),
    ("comedy", 35),
    ("crime", 80),
    ("documentary", 99),
    ("drama", 18),
    ("family", 10751),
    ("fantasy", 14),
    ("history", 36),
    ("horror", 27),
    ("music", 10402),
    ("mystery", 9648),
    ("romance", 10749),
    ("sciencefiction", 878),
    ("tvmovie", 10770),
    ("thriller", 53),
    ("war", 10752),
    ("western", 37),
];

/// Immutable genre name <-> identifier mapping
///
/// Built once at start-up and shared read-only between all in-flight commands.
#[derive(Debug, Clone)]
pub struct GenreTable {
    by_name: HashMap<String, u32>,
    by_id: HashMap<u32, String>,
}

impl GenreTable {
    /// Builds a table from `(name, id)` pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        for (name, id) in entries {
            let name = name.into();
            by_id.insert(id, name.clone());
            by_name.insert(name, id);
        }
        Self { by_name, by_id }
    }

    /// The TMDB movie genre list
    pub fn tmdb() -> Self {
        Self::new(TMDB_MOVIE_GENRES.iter().copied())
    }

    /// Exact-match lookup on the canonical key
    pub fn id_for(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup of an identifier
    pub fn name_for(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }
}
