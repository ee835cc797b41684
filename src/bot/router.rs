use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use tracing::Instrument;
use uuid::Uuid;

use super::command::{normalize_genre_key, Command};
use super::formatting::{CardFormatter, MovieCard};
use crate::{
    error::{AppError, AppResult},
    models::{GenreTable, Movie},
    services::{select_random, MovieProvider},
};

/// Upper bound on cards per reply
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const GENRE_USAGE: &str = "❗ Please provide a genre. Example: `!genre comedy`";
pub const GENRE_NOT_RECOGNIZED: &str =
    "❗ Genre not recognized. Try something like `action`, `comedy`, `horror`, `romance`, etc.";
pub const TRENDING_APOLOGY: &str = "❗ Oops! Couldn't fetch a movie right now.";
pub const GENRE_APOLOGY: &str = "❗ Couldn't fetch movies from that genre right now.";

/// The parts of an inbound chat message the router looks at
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub content: String,
    pub author_is_bot: bool,
}

impl IncomingMessage {
    pub fn new(content: impl Into<String>, author_is_bot: bool) -> Self {
        Self {
            content: content.into(),
            author_is_bot,
        }
    }
}

/// What the router wants sent back to the channel
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Cards(Vec<MovieCard>),
}

/// Destination for replies, normally the channel the command came from
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ReplyTarget: Send + Sync {
    async fn send(&self, reply: Reply) -> AppResult<()>;
}

/// Classifies inbound messages and drives the matching flow
pub struct CommandRouter {
    provider: Arc<dyn MovieProvider>,
    genres: Arc<GenreTable>,
    formatter: CardFormatter,
    rng: Mutex<StdRng>,
}

impl CommandRouter {
    pub fn new(
        provider: Arc<dyn MovieProvider>,
        genres: Arc<GenreTable>,
        formatter: CardFormatter,
        rng: StdRng,
    ) -> Self {
        Self {
            provider,
            genres,
            formatter,
            rng: Mutex::new(rng),
        }
    }

    /// Handles one message and sends the reply, if any, to `target`
    ///
    /// Send failures are logged and swallowed.
    pub async fn dispatch(&self, message: &IncomingMessage, target: &dyn ReplyTarget) {
        let Some(command) = Self::classify(message) else {
            return;
        };

        let span = tracing::info_span!(
            "command",
            command_id = %Uuid::new_v4(),
            command = command.name(),
        );

        async {
            let reply = self.run(command).await;
            if let Err(e) = target.send(reply).await {
                tracing::error!(error = %e, "Failed to send reply");
            }
        }
        .instrument(span)
        .await
    }

    /// Computes the reply for a message without sending it
    ///
    /// Returns `None` for bot-authored and unrecognized messages.
    pub async fn handle(&self, message: &IncomingMessage) -> Option<Reply> {
        let command = Self::classify(message)?;
        Some(self.run(command).await)
    }

    /// Bot-authored messages never produce a command
    fn classify(message: &IncomingMessage) -> Option<Command> {
        if message.author_is_bot {
            return None;
        }
        Command::parse(&message.content)
    }

    async fn run(&self, command: Command) -> Reply {
        match command {
            Command::Trending => self.trending_flow().await,
            Command::Genre(token) => self.genre_flow(token).await,
        }
    }

    async fn trending_flow(&self) -> Reply {
        match self.fetch_trending().await {
            Ok(cards) => Reply::Cards(cards),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    flow = "trending",
                    provider = self.provider.name(),
                    "Trending recommendation failed"
                );
                Reply::Text(TRENDING_APOLOGY.to_string())
            }
        }
    }

    async fn fetch_trending(&self) -> AppResult<Vec<MovieCard>> {
        let movies = self.provider.trending_movies().await?;
        let picked = self.pick(&movies, "trending")?;

        Ok(picked
            .iter()
            .map(|movie| self.formatter.trending_card(movie, &self.genres))
            .collect())
    }

    async fn genre_flow(&self, token: Option<String>) -> Reply {
        let Some(token) = token else {
            tracing::debug!("Genre command without a genre");
            return Reply::Text(GENRE_USAGE.to_string());
        };

        let key = normalize_genre_key(&token);
        let Some(genre_id) = self.genres.id_for(&key) else {
            tracing::debug!(genre = %token, "Unrecognized genre");
            return Reply::Text(GENRE_NOT_RECOGNIZED.to_string());
        };

        match self.fetch_genre(genre_id, &token).await {
            Ok(cards) => Reply::Cards(cards),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    flow = "genre",
                    genre = %key,
                    genre_id,
                    provider = self.provider.name(),
                    "Genre recommendation failed"
                );
                Reply::Text(GENRE_APOLOGY.to_string())
            }
        }
    }

    async fn fetch_genre(&self, genre_id: u32, requested: &str) -> AppResult<Vec<MovieCard>> {
        let movies = self.provider.discover_by_genre(genre_id).await?;
        let picked = self.pick(&movies, "discover")?;

        Ok(picked
            .iter()
            .map(|movie| self.formatter.genre_card(movie, requested))
            .collect())
    }

    fn pick(&self, movies: &[Movie], source: &str) -> AppResult<Vec<Movie>> {
        if movies.is_empty() {
            return Err(AppError::NoResults(format!("{} returned no movies", source)));
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(select_random(movies, MAX_RECOMMENDATIONS, &mut *rng))
    }
}
