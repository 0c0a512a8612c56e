//! AniGame: battle-cooldown reminders.

use super::{message_text, target_user, Scraper};
use crate::constants::{ANIGAME_BATTLE_MINUTES, ANIGAME_ID};
use crate::database::models::ReminderInfo;
use crate::database::reminders;
use crate::error::BotError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub struct AnigameScraper;

/// Cooldown template, e.g. "You are on cooldown! Battle again in 30 minutes."
pub fn is_battle_cooldown(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("cooldown") && lower.contains("battle")
}

#[async_trait]
impl Scraper for AnigameScraper {
    fn source_id(&self) -> u64 {
        ANIGAME_ID
    }

    async fn handle(&self, _ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
        if !is_battle_cooldown(&message_text(msg)) {
            return Ok(());
        }
        let Some(user_id) = target_user(msg) else {
            return Ok(());
        };
        reminders::create_reminder(
            &state.db,
            user_id,
            msg.guild_id.map(|g| g.get() as i64),
            msg.channel_id.get() as i64,
            ANIGAME_BATTLE_MINUTES,
            "Anigame Battle",
            ReminderInfo {
                command: ".battle".to_string(),
                information: "Battle cooldown is over.".to_string(),
            },
            false,
        )
        .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_template() {
        assert!(is_battle_cooldown("You are on cooldown! Battle again in 30 minutes."));
        assert!(!is_battle_cooldown("You won the battle!"));
    }
}
