//! Dank Memer: payout tracking and the daily-streak reminder.

use super::{message_text, target_user, Scraper};
use crate::constants::{DANK_DAILY_MINUTES, DANK_MEMER_ID};
use crate::database::models::ReminderInfo;
use crate::database::{dank, reminders};
use crate::error::BotError;
use crate::model::AppState;
use crate::util::parse_amount;
use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub struct DankScraper;

/// Activities whose payout lines are tracked. The keyword is matched
/// case-insensitively against the flattened message text.
const ACTIVITIES: &[(&str, &str)] = &[
    ("work", "Work"),
    ("adventure", "Adventure"),
    ("daily", "Daily"),
    ("beg", "Beg"),
    ("crime", "Crime"),
];

/// Extract `(activity, coins)` from a payout message. Payouts always carry
/// the `⏣` currency marker directly before the amount.
pub fn parse_payout(text: &str) -> Option<(&'static str, i64)> {
    let marker = text.find('⏣')?;
    let after = &text[marker + '⏣'.len_utf8()..];
    let coins = parse_amount(after.split_whitespace().next()?.trim_end_matches(['!', '.', '*']))?;
    let lower = text.to_lowercase();
    let (_, activity) = ACTIVITIES.iter().find(|(needle, _)| lower.contains(needle))?;
    Some((activity, coins))
}

/// The daily template also restarts the 24h streak clock.
pub fn is_daily(text: &str) -> bool {
    text.to_lowercase().contains("daily coins")
}

#[async_trait]
impl Scraper for DankScraper {
    fn source_id(&self) -> u64 {
        DANK_MEMER_ID
    }

    async fn handle(&self, _ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
        let Some(user_id) = target_user(msg) else {
            return Ok(());
        };
        let text = message_text(msg);

        if let Some((activity, coins)) = parse_payout(&text) {
            dank::record_activity(&state.db, user_id, activity, coins).await?;
        }

        if is_daily(&text) {
            reminders::create_reminder(
                &state.db,
                user_id,
                msg.guild_id.map(|g| g.get() as i64),
                msg.channel_id.get() as i64,
                DANK_DAILY_MINUTES,
                "Dank Daily",
                ReminderInfo {
                    command: "/daily".to_string(),
                    information: "Your daily streak is ready.".to_string(),
                },
                false,
            )
            .await;
            state.scheduler_wake.notify_one();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_with_separators() {
        let text = "You went on an adventure and got ⏣ 5,230!";
        assert_eq!(parse_payout(text), Some(("Adventure", 5230)));
    }

    #[test]
    fn payout_requires_currency_marker() {
        assert_eq!(parse_payout("You got 500 coins from work"), None);
    }

    #[test]
    fn payout_requires_known_activity() {
        assert_eq!(parse_payout("mystery bonus ⏣ 100"), None);
    }

    #[test]
    fn daily_detection() {
        assert!(is_daily("You got your Daily Coins!\n⏣ 10,000"));
        assert!(!is_daily("You worked your shift"));
    }
}
