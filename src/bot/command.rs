/// Keywords that trigger the trending flow
pub const TRENDING_KEYWORDS: [&str; 2] = ["!recommend", "!movie"];

/// Keyword that triggers the genre flow
pub const GENRE_KEYWORD: &str = "!genre";

/// A recognized chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!recommend` or `!movie`
    Trending,
    /// `!genre [token]`, carrying the lowercased token as typed
    Genre(Option<String>),
}

impl Command {
    /// Classifies a raw message
    ///
    /// Text is trimmed and lowercased first. Trending keywords must be the
    /// whole message; the genre keyword must be the first whitespace-delimited
    /// token. Anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let content = raw.trim().to_lowercase();

        if TRENDING_KEYWORDS.contains(&content.as_str()) {
            return Some(Self::Trending);
        }

        let mut tokens = content.split_whitespace();
        if tokens.next() == Some(GENRE_KEYWORD) {
            return Some(Self::Genre(tokens.next().map(str::to_owned)));
        }

        None
    }

    /// Short name used in log spans
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Genre(_) => "genre",
        }
    }
}

/// Reduces a genre token to its lookup key: lowercase ASCII letters only
pub fn normalize_genre_key(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trending_keywords() {
        assert_eq!(Command::parse("!recommend"), Some(Command::Trending));
        assert_eq!(Command::parse("!movie"), Some(Command::Trending));
        assert_eq!(Command::parse("  !MOVIE \n"), Some(Command::Trending));
    }

    #[test]
    fn test_parse_trending_requires_exact_text() {
        assert_eq!(Command::parse("!recommend please"), None);
        assert_eq!(Command::parse("!movies"), None);
        assert_eq!(Command::parse("say !movie"), None);
    }

    #[test]
    fn test_parse_genre_with_token() {
        assert_eq!(
            Command::parse("!genre Comedy"),
            Some(Command::Genre(Some("comedy".to_string())))
        );
        assert_eq!(
            Command::parse("!genre   sci-fi  extra words"),
            Some(Command::Genre(Some("sci-fi".to_string())))
        );
    }

    #[test]
    fn test_parse_genre_without_token() {
        assert_eq!(Command::parse("!genre"), Some(Command::Genre(None)));
        assert_eq!(Command::parse("  !genre   "), Some(Command::Genre(None)));
    }

    #[test]
    fn test_parse_ignores_other_text() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("hello there"), None);
        assert_eq!(Command::parse("!genres comedy"), None);
        assert_eq!(Command::parse("!help"), None);
    }

    #[test]
    fn test_normalize_genre_key() {
        assert_eq!(normalize_genre_key("comedy"), "comedy");
        assert_eq!(normalize_genre_key("Science-Fiction"), "sciencefiction");
        assert_eq!(normalize_genre_key("tv_movie!"), "tvmovie");
        assert_eq!(normalize_genre_key("42"), "");
        assert_eq!(normalize_genre_key("crème"), "crme");
    }

    #[test]
    fn test_command_name() {
        assert_eq!(Command::Trending.name(), "trending");
        assert_eq!(Command::Genre(None).name(), "genre");
    }
}
