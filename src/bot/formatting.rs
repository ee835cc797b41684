use crate::models::{GenreTable, Movie};

pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN_GENRE: &str = "Unknown";
pub const GENRE_SEPARATOR: &str = ", ";

pub const GENRE_FIELD_NAME: &str = "📚 Genre";
pub const RATING_FIELD_NAME: &str = "⭐ Rating";

pub const TRENDING_COLOR: u32 = 0xff5f5f;
pub const GENRE_COLOR: u32 = 0x7f5fff;

/// A named value shown on a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-neutral display card for one movie
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub description: String,
    pub fields: Vec<CardField>,
    pub image_url: Option<String>,
    pub color: u32,
}

impl MovieCard {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Turns movie records into display cards
#[derive(Debug, Clone)]
pub struct CardFormatter {
    image_base_url: String,
}

impl CardFormatter {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
        }
    }

    /// Card for the trending flow; the genre field is reverse-looked-up from the movie
    pub fn trending_card(&self, movie: &Movie, genres: &GenreTable) -> MovieCard {
        let label = genre_labels(&movie.genre_ids, genres);
        self.card(movie, label, TRENDING_COLOR)
    }

    /// Card for the genre flow; the genre field echoes the requested token
    pub fn genre_card(&self, movie: &Movie, requested_genre: &str) -> MovieCard {
        self.card(movie, requested_genre.to_string(), GENRE_COLOR)
    }

    fn card(&self, movie: &Movie, genre_label: String, color: u32) -> MovieCard {
        let description = match movie.overview.as_deref() {
            Some(overview) if !overview.is_empty() => overview.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };

        MovieCard {
            title: movie.title.clone(),
            description,
            fields: vec![
                CardField {
                    name: GENRE_FIELD_NAME.to_string(),
                    value: genre_label,
                    inline: true,
                },
                CardField {
                    name: RATING_FIELD_NAME.to_string(),
                    value: movie.vote_average.to_string(),
                    inline: true,
                },
            ],
            image_url: self.poster_url(movie.poster_path.as_deref()),
            color,
        }
    }

    fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", self.image_base_url, path))
    }
}

/// Human-readable genre labels for a list of identifiers
///
/// Identifiers missing from the table are dropped. Falls back to "Unknown"
/// when nothing resolves.
pub fn genre_labels(genre_ids: &[u32], genres: &GenreTable) -> String {
    let labels: Vec<String> = genre_ids
        .iter()
        .filter_map(|id| genres.name_for(*id))
        .map(capitalize)
        .collect();

    if labels.is_empty() {
        UNKNOWN_GENRE.to_string()
    } else {
        labels.join(GENRE_SEPARATOR)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
