//! Row structs shared by the query modules, plus the JSON payload shapes
//! stored inside them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the generic `(id, type)` key-value state table.
#[derive(Debug, Clone, FromRow)]
pub struct StateRow {
    pub id: String,
    #[sqlx(rename = "type")]
    pub state_type: String,
    pub json_state: String,
    pub is_permanent: bool,
    pub updated_at: i64,
}

/// A pending reminder. At most one row exists per `(type, user_id)`.
#[derive(Debug, Clone, FromRow)]
pub struct Reminder {
    #[sqlx(rename = "type")]
    pub reminder_type: String,
    pub user_id: i64,
    pub guild_id: Option<i64>,
    pub channel_id: i64,
    pub information: String,
    pub due_at: i64,
    pub deliver_as_dm: bool,
}

/// Display fields carried inside a reminder's `information` column. Opaque to
/// the scheduler; only the notification formatter reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReminderInfo {
    /// Command hint shown in the notification, e.g. `kvi`.
    #[serde(default)]
    pub command: String,
    /// Free-form note shown under the hint.
    #[serde(default)]
    pub information: String,
}

/// Everything needed to re-queue a reminder when its snooze button is
/// pressed, captured at delivery time because the row itself is deleted on
/// success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnoozePayload {
    pub reminder_type: String,
    pub user_id: i64,
    pub guild_id: Option<i64>,
    pub channel_id: i64,
    pub information: String,
    pub deliver_as_dm: bool,
}

/// Per-activity scraped Dank Memer totals for one user.
#[derive(Debug, Clone, FromRow)]
pub struct DankStat {
    pub user_id: i64,
    pub activity: String,
    pub uses: i64,
    pub coins_earned: i64,
}

/// A named percentage multiplier owned by one user.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Multiplier {
    pub user_id: i64,
    pub name: String,
    pub percent: i64,
}

/// A wished-for card series.
#[derive(Debug, Clone, FromRow)]
pub struct WishlistEntry {
    pub user_id: i64,
    pub series: String,
    pub added_at: i64,
}

/// Drop/claim counters for a nuke event in one channel.
#[derive(Debug, Clone, FromRow)]
pub struct NukeSession {
    pub channel_id: i64,
    pub starter_id: i64,
    pub started_at: i64,
    pub drops: i64,
    pub claims: i64,
    pub active: bool,
}
