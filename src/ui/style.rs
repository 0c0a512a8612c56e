//! Central UI style constants and helpers.
pub const COLOR_PANEL: u32 = 0x9B59B6; // Purple
pub const COLOR_REMINDER: u32 = 0x3498DB; // Blue
pub const COLOR_STATS: u32 = 0x2ECC71; // Green
pub const COLOR_NUKE: u32 = 0xE67E22; // Orange
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_BELL: &str = "🔔";
pub const EMOJI_SNOOZE: &str = "💤";
pub const EMOJI_COIN: &str = "💰";
pub const EMOJI_WISH: &str = "🌠";
pub const EMOJI_NUKE: &str = "💥";

// Standard target widths for padded button labels.
pub const BTN_W_NARROW: usize = 12; // short actions (Add, End)
pub const BTN_W_STD: usize = 16; // common secondary buttons (Refresh, Snooze)

/// Pads a label with trailing spaces so multi-row action bars align better.
/// Discord collapses long runs of trailing spaces, so the pad is clamped to 2.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}
pub fn pad_narrow(label: &str) -> String {
    pad_label(label, BTN_W_NARROW)
}

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
