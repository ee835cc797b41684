use std::sync::Arc;

use serenity::{
    async_trait,
    builder::CreateEmbed,
    client::{Context, EventHandler},
    http::Http,
    model::{channel::Message, gateway::Ready, id::ChannelId},
    prelude::GatewayIntents,
};

use super::formatting::MovieCard;
use super::router::{CommandRouter, IncomingMessage, Reply, ReplyTarget};
use crate::error::AppResult;

/// Intents needed to read message text in guild channels
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Serenity event handler feeding messages into the router
pub struct Handler {
    router: Arc<CommandRouter>,
}

impl Handler {
    pub fn new(router: Arc<CommandRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = IncomingMessage::new(msg.content.clone(), msg.author.bot);
        let target = ChannelTarget::new(ctx.http.clone(), msg.channel_id);
        self.router.dispatch(&incoming, &target).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "🎬 Logged in to Discord"
        );
    }
}

/// Sends replies to a Discord channel
pub struct ChannelTarget {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelTarget {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl ReplyTarget for ChannelTarget {
    async fn send(&self, reply: Reply) -> AppResult<()> {
        match reply {
            Reply::Text(text) => {
                self.channel_id.say(&self.http, text).await?;
            }
            Reply::Cards(cards) => {
                let embeds: Vec<CreateEmbed> = cards.iter().map(to_embed).collect();
                self.channel_id
                    .send_message(&self.http, |message| message.add_embeds(embeds))
                    .await?;
            }
        }
        Ok(())
    }
}

/// Renders a card as a Discord embed
pub fn to_embed(card: &MovieCard) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed
        .title(&card.title)
        .description(&card.description)
        .color(card.color);
    for field in &card.fields {
        embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(image_url) = &card.image_url {
        embed.image(image_url);
    }
    embed
}
