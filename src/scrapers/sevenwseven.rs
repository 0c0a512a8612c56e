//! 7w7: nuke-session tracking. A nuke announcement opens the channel's
//! session; drop and claim templates feed its counters.

use super::{message_text, target_user, Scraper};
use crate::constants::SEVEN_W_SEVEN_ID;
use crate::database::nuke;
use crate::error::BotError;
use crate::model::AppState;
use crate::util::parse_amount;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub struct SevenScraper;

/// "A NUKE has been launched!" opens a fresh session.
pub fn is_nuke_start(text: &str) -> bool {
    text.to_uppercase().contains("NUKE HAS BEEN LAUNCHED")
}

/// "dropped 12 cards" mid-nuke; the count feeds the session's drop counter.
pub fn parse_drop_count(text: &str) -> Option<i64> {
    let lower = text.to_lowercase();
    let idx = lower.find("dropped ")?;
    let rest = &lower[idx + "dropped ".len()..];
    let count = parse_amount(rest.split_whitespace().next()?)?;
    lower.contains("cards").then_some(count)
}

/// One claim per "took the" grab confirmation.
pub fn is_claim(text: &str) -> bool {
    text.to_lowercase().contains("took the")
}

#[async_trait]
impl Scraper for SevenScraper {
    fn source_id(&self) -> u64 {
        SEVEN_W_SEVEN_ID
    }

    async fn handle(&self, _ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
        let text = message_text(msg);
        let channel_id = msg.channel_id.get() as i64;

        if is_nuke_start(&text) {
            let starter = target_user(msg).unwrap_or(msg.author.id);
            nuke::open(&state.db, channel_id, starter).await?;
            return Ok(());
        }
        if let Some(count) = parse_drop_count(&text) {
            nuke::add_drops(&state.db, channel_id, count).await?;
        }
        if is_claim(&text) {
            nuke::add_claim(&state.db, channel_id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuke_start_template() {
        assert!(is_nuke_start("💥 A NUKE has been launched! Cards incoming."));
        assert!(!is_nuke_start("nuke soon maybe"));
    }

    #[test]
    fn drop_count_parses() {
        assert_eq!(parse_drop_count("The nuke dropped 12 cards!"), Some(12));
        assert_eq!(parse_drop_count("dropped everything"), None);
    }

    #[test]
    fn claim_template() {
        assert!(is_claim("Evelyn took the **Holo** card!"));
        assert!(!is_claim("Evelyn missed the card"));
    }
}
