/// TMDB (The Movie Database) v3 provider
///
/// API Flow:
/// 1. Trending: /trending/movie/day → today's trending movies
/// 2. Discover: /discover/movie?with_genres={id}&sort_by=popularity.desc
///
/// Both endpoints authenticate with the `api_key` query parameter.
use crate::{
    error::{AppError, AppResult},
    models::{Movie, MoviePage},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;

const TRENDING_PATH: &str = "/trending/movie/day";
const DISCOVER_PATH: &str = "/discover/movie";
const SORT_POPULARITY_DESC: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn trending_query(&self) -> Vec<(&'static str, String)> {
        vec![("api_key", self.api_key.clone())]
    }

    fn discover_query(&self, genre_id: u32) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("with_genres", genre_id.to_string()),
            ("sort_by", SORT_POPULARITY_DESC.to_string()),
        ]
    }

    /// GET one list page and return its results
    async fn fetch_page(&self, path: &str, query: &[(&str, String)]) -> AppResult<Vec<Movie>> {
        let url = format!("{}{}", self.api_url, path);

        // reqwest errors carry the request URL, which includes the api_key
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let page: MoviePage = response
            .json()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        tracing::info!(
            endpoint = %path,
            page = page.page,
            results = page.results.len(),
            total_results = page.total_results,
            provider = self.name(),
            "Movie list fetched"
        );

        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn trending_movies(&self) -> AppResult<Vec<Movie>> {
        self.fetch_page(TRENDING_PATH, &self.trending_query()).await
    }

    async fn discover_by_genre(&self, genre_id: u32) -> AppResult<Vec<Movie>> {
        self.fetch_page(DISCOVER_PATH, &self.discover_query(genre_id))
            .await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
