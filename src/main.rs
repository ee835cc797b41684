use std::sync::Arc;

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use serenity::Client;

use reelbot::{
    api,
    bot::{discord, CardFormatter, CommandRouter},
    config::Config,
    models::GenreTable,
    services::{MovieProvider, TmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let provider: Arc<dyn MovieProvider> = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
    ));
    let rng = match config.selection_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let router = Arc::new(CommandRouter::new(
        provider,
        Arc::new(GenreTable::tmdb()),
        CardFormatter::new(config.tmdb_image_base_url.clone()),
        rng,
    ));

    if let Some(port) = config.port {
        let host = config.host.clone();
        tokio::spawn(async move {
            if let Err(e) = api::serve(&host, port).await {
                tracing::error!(error = %e, "Health endpoint stopped");
            }
        });
    }

    let mut client = Client::builder(&config.discord_token, discord::intents())
        .event_handler(discord::Handler::new(router))
        .await
        .context("Failed to create Discord client")?;

    client.start().await.context("Discord client error")?;
    Ok(())
}
