/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("No results: {0}")]
    NoResults(String),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
