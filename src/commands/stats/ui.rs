//! Embed rendering for `/stats`.

use crate::database::models::DankStat;
use crate::ui::style::{COLOR_STATS, EMOJI_COIN};
use serenity::builder::CreateEmbed;

pub fn create_stats_embed(stats: &[DankStat]) -> CreateEmbed {
    let description = if stats.is_empty() {
        "No activity tracked yet. Play a few rounds and check back.".to_string()
    } else {
        stats
            .iter()
            .map(|s| {
                format!(
                    "**{}**: {} uses · {EMOJI_COIN} {} earned",
                    s.activity, s.uses, s.coins_earned
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title("Tracked Activity")
        .description(description)
        .color(COLOR_STATS)
}
