//! Message scrapers: one handler per supported source bot, pattern-matching
//! that bot's literal message/embed templates and writing into the domain
//! tables or creating reminders. Unknown formats are ignored without noise:
//! the source bots change copy routinely and a missed template must never
//! break message handling.

pub mod anigame;
pub mod dank;
pub mod izzi;
pub mod karuta;
pub mod sevenwseven;

use crate::error::BotError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// User id of the bot whose messages this scraper understands.
    fn source_id(&self) -> u64;
    async fn handle(&self, ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError>;
}

/// The full scraper roster, built once at startup.
pub fn all() -> Vec<Box<dyn Scraper>> {
    vec![
        Box::new(dank::DankScraper),
        Box::new(karuta::KarutaScraper),
        Box::new(izzi::IzziScraper),
        Box::new(anigame::AnigameScraper),
        Box::new(sevenwseven::SevenScraper),
    ]
}

/// Route a bot-authored message to whichever scraper claims its author.
pub async fn dispatch(ctx: &Context, msg: &Message, state: &AppState) {
    let author = msg.author.id.get();
    for scraper in &state.scrapers {
        if scraper.source_id() == author {
            if let Err(e) = scraper.handle(ctx, msg, state).await {
                tracing::warn!(target: "scraper", author, error = %e, "scraper failed");
            }
        }
    }
}

/// Everything textual about a message, flattened for template matching:
/// content plus every embed's title, description, and field values.
pub fn message_text(msg: &Message) -> String {
    let mut parts = vec![msg.content.clone()];
    for embed in &msg.embeds {
        if let Some(title) = &embed.title {
            parts.push(title.clone());
        }
        if let Some(description) = &embed.description {
            parts.push(description.clone());
        }
        for field in &embed.fields {
            parts.push(field.value.clone());
        }
    }
    parts.retain(|p| !p.is_empty());
    parts.join("\n")
}

/// The player a bot message is about: the slash-command invoker when the
/// message is an interaction response, else the first mentioned human.
pub fn target_user(msg: &Message) -> Option<UserId> {
    if let Some(interaction) = &msg.interaction {
        return Some(interaction.user.id);
    }
    msg.mentions.iter().find(|u| !u.bot).map(|u| u.id)
}
