//! Small shared helpers: clock access and Discord-flavored formatting.

use chrono::Utc;

/// Current wall-clock time in epoch milliseconds. All due-time arithmetic in
/// the reminders table runs on this scale.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Discord relative-timestamp markup (`in 5 minutes`, `2 hours ago`).
pub fn relative_timestamp(epoch_ms: i64) -> String {
    format!("<t:{}:R>", epoch_ms / 1_000)
}

/// Strip thousands separators and parse an integer amount such as `5,230`.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

/// Truncate to a character budget, appending an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_separators() {
        assert_eq!(parse_amount("5,230"), Some(5230));
        assert_eq!(parse_amount("42"), Some(42));
        assert_eq!(parse_amount("⏣ 42"), None);
    }

    #[test]
    fn truncate_preserves_short_text() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
    }
}
