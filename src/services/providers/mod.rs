/// Movie metadata provider abstraction
///
/// The command router only talks to this trait, so flows can be exercised
/// without network access by substituting a mock provider.
use crate::{error::AppResult, models::Movie};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch today's trending movies (first page)
    async fn trending_movies(&self) -> AppResult<Vec<Movie>>;

    /// Fetch movies tagged with `genre_id`, most popular first (first page)
    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
