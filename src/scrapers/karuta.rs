//! Karuta: visit-cooldown reminders and wishlist drop pings.

use super::{message_text, target_user, Scraper};
use crate::constants::{KARUTA_ID, KARUTA_VISIT_MINUTES};
use crate::database::models::ReminderInfo;
use crate::database::{reminders, wishlist};
use crate::error::BotError;
use crate::model::AppState;
use crate::ui::style::EMOJI_WISH;
use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub struct KarutaScraper;

/// Template shown when a visit charge is spent.
pub fn is_visit(text: &str) -> bool {
    text.contains("is now visiting")
}

/// Card lines in a drop announcement look like
/// `` `♡412` · Spice and Wolf · **Holo** ``: middle segment is the series.
pub fn parse_drop_series(text: &str) -> Vec<String> {
    if !text.contains("is dropping") {
        return Vec::new();
    }
    let mut series = Vec::new();
    for line in text.lines() {
        let parts: Vec<&str> = line.split('·').map(str::trim).collect();
        if parts.len() >= 3 && !parts[1].is_empty() {
            let name = parts[1].trim_matches(['*', '`']).trim().to_string();
            if !series.contains(&name) {
                series.push(name);
            }
        }
    }
    series
}

#[async_trait]
impl Scraper for KarutaScraper {
    fn source_id(&self) -> u64 {
        KARUTA_ID
    }

    async fn handle(&self, ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
        let text = message_text(msg);

        if is_visit(&text) {
            if let Some(user_id) = target_user(msg) {
                reminders::create_reminder(
                    &state.db,
                    user_id,
                    msg.guild_id.map(|g| g.get() as i64),
                    msg.channel_id.get() as i64,
                    KARUTA_VISIT_MINUTES,
                    "Karuta Visit",
                    ReminderInfo {
                        command: "kvi".to_string(),
                        information: "Your visit charge is back.".to_string(),
                    },
                    false,
                )
                .await;
            }
        }

        // Wishlist pings: every wisher of a dropped series gets one mention,
        // regardless of how many of their series are in the drop.
        let dropped = parse_drop_series(&text);
        if !dropped.is_empty() {
            let mut wishers: Vec<i64> = Vec::new();
            let mut matched: Vec<&str> = Vec::new();
            for series in &dropped {
                let users = wishlist::users_wishing(&state.db, series).await?;
                if !users.is_empty() {
                    matched.push(series.as_str());
                }
                for user in users {
                    if !wishers.contains(&user) {
                        wishers.push(user);
                    }
                }
            }
            if !wishers.is_empty() {
                let mentions: Vec<String> =
                    wishers.iter().map(|id| format!("<@{}>", *id as u64)).collect();
                let content = format!(
                    "{EMOJI_WISH} A wishlisted series is dropping ({})! {}",
                    matched.join(", "),
                    mentions.join(" ")
                );
                msg.channel_id
                    .send_message(&ctx.http, CreateMessage::new().content(content))
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_template() {
        assert!(is_visit("Evelyn is now visiting **Holo**!"));
        assert!(!is_visit("Evelyn grabbed the card"));
    }

    #[test]
    fn drop_series_are_extracted_and_deduped() {
        let text = "Evelyn is dropping 3 cards!\n\
                    `♡412` · Spice and Wolf · **Holo**\n\
                    `♡77` · Spice and Wolf · **Lawrence**\n\
                    `♡9` · Initial D · **Takumi**";
        assert_eq!(parse_drop_series(text), vec!["Spice and Wolf", "Initial D"]);
    }

    #[test]
    fn non_drop_messages_yield_nothing() {
        assert!(parse_drop_series("`♡412` · Spice and Wolf · **Holo**").is_empty());
    }
}
