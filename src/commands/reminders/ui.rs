//! Embed rendering for `/reminders list`.

use crate::database::models::{Reminder, ReminderInfo};
use crate::ui::style::{COLOR_REMINDER, EMOJI_BELL};
use crate::util::relative_timestamp;
use serenity::builder::CreateEmbed;

pub fn create_list_embed(reminders: &[Reminder]) -> CreateEmbed {
    let description = if reminders.is_empty() {
        "You have no pending reminders.".to_string()
    } else {
        reminders
            .iter()
            .map(|r| {
                let info: ReminderInfo = serde_json::from_str(&r.information).unwrap_or_default();
                let hint = if info.command.is_empty() {
                    String::new()
                } else {
                    format!(" · `{}`", info.command)
                };
                format!(
                    "{} **{}**: due {}{}",
                    EMOJI_BELL,
                    r.reminder_type,
                    relative_timestamp(r.due_at),
                    hint
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title("Pending Reminders")
        .description(description)
        .color(COLOR_REMINDER)
}
