use serde::Deserialize;
use std::fmt;

/// Application configuration loaded from environment variables
#[derive(Deserialize, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,

    /// TMDB API key, sent as the `api_key` query parameter
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Prefix prepended to poster paths
    #[serde(default = "default_tmdb_image_base_url")]
    pub tmdb_image_base_url: String,

    /// Health endpoint host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Health endpoint port. The endpoint is only served when this is set.
    #[serde(default)]
    pub port: Option<u16>,

    /// Fixed seed for recommendation sampling
    #[serde(default)]
    pub selection_seed: Option<u64>,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("tmdb_api_key", &"<redacted>")
            .field("tmdb_api_url", &self.tmdb_api_url)
            .field("tmdb_image_base_url", &self.tmdb_image_base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("selection_seed", &self.selection_seed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[
            ("DISCORD_TOKEN", "discord"),
            ("TMDB_API_KEY", "tmdb"),
        ]))
        .unwrap();

        assert_eq!(config.discord_token, "discord");
        assert_eq!(config.tmdb_api_key, "tmdb");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb_image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, None);
        assert_eq!(config.selection_seed, None);
    }

    #[test]
    fn test_optional_values_parsed() {
        let config = Config::from_vars(vars(&[
            ("DISCORD_TOKEN", "discord"),
            ("TMDB_API_KEY", "tmdb"),
            ("PORT", "8080"),
            ("SELECTION_SEED", "42"),
            ("TMDB_API_URL", "http://localhost:9000"),
        ]))
        .unwrap();

        assert_eq!(config.port, Some(8080));
        assert_eq!(config.selection_seed, Some(42));
        assert_eq!(config.tmdb_api_url, "http://localhost:9000");
    }

    #[test]
    fn test_missing_token_fails() {
        let result = Config::from_vars(vars(&[("TMDB_API_KEY", "tmdb")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_vars(vars(&[
            ("DISCORD_TOKEN", "super-secret-token"),
            ("TMDB_API_KEY", "super-secret-key"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token"));
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
