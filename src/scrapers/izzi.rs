//! izzi: raid-cooldown reminders.

use super::{message_text, target_user, Scraper};
use crate::constants::{IZZI_ID, IZZI_RAID_MINUTES};
use crate::database::models::ReminderInfo;
use crate::database::reminders;
use crate::error::BotError;
use crate::model::AppState;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub struct IzziScraper;

/// Raid-spent template, e.g. "Your raid has begun! You can raid again in 2 hours."
pub fn is_raid_start(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("raid") && lower.contains("you can raid again")
}

#[async_trait]
impl Scraper for IzziScraper {
    fn source_id(&self) -> u64 {
        IZZI_ID
    }

    async fn handle(&self, _ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
        if !is_raid_start(&message_text(msg)) {
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
            IZZI_RAID_MINUTES,
            "Izzi Raid",
            ReminderInfo {
                command: "iz rd".to_string(),
                information: "Raid energy restored.".to_string(),
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
    fn raid_template() {
        assert!(is_raid_start("Your raid has begun! You can raid again in 2 hours."));
        assert!(!is_raid_start("Your raid failed."));
    }
}
