//! Query functions for the reminders table. The `(type, user_id)` primary
//! key gives insert-or-replace semantics: re-creating a reminder of the same
//! type moves its due time instead of queueing a second one.

use super::init::DbPool;
use super::models::{Reminder, ReminderInfo};
use crate::util::now_ms;
use serenity::model::id::UserId;

/// Insert or replace the `(type, user)` row, due `minutes` from now.
#[allow(clippy::too_many_arguments)]
pub async fn upsert(
    pool: &DbPool,
    user_id: UserId,
    guild_id: Option<i64>,
    channel_id: i64,
    minutes: i64,
    reminder_type: &str,
    info: &ReminderInfo,
    deliver_as_dm: bool,
) -> Result<(), sqlx::Error> {
    let due_at = now_ms() + minutes * 60_000;
    upsert_at(
        pool,
        user_id.get() as i64,
        guild_id,
        channel_id,
        due_at,
        reminder_type,
        info,
        deliver_as_dm,
    )
    .await
}

/// Same as [`upsert`] but with an absolute due time (used by snooze).
#[allow(clippy::too_many_arguments)]
pub async fn upsert_at(
    pool: &DbPool,
    user_id: i64,
    guild_id: Option<i64>,
    channel_id: i64,
    due_at: i64,
    reminder_type: &str,
    info: &ReminderInfo,
    deliver_as_dm: bool,
) -> Result<(), sqlx::Error> {
    let information = serde_json::to_string(info).unwrap_or_else(|_| "{}".to_string());
    sqlx::query(
        r#"INSERT INTO reminders (type, user_id, guild_id, channel_id, information, due_at, deliver_as_dm)
           VALUES (?, ?, ?, ?, ?, ?, ?)
           ON CONFLICT (type, user_id) DO UPDATE SET
             guild_id = excluded.guild_id,
             channel_id = excluded.channel_id,
             information = excluded.information,
             due_at = excluded.due_at,
             deliver_as_dm = excluded.deliver_as_dm"#,
    )
    .bind(reminder_type)
    .bind(user_id)
    .bind(guild_id)
    .bind(channel_id)
    .bind(information)
    .bind(due_at)
    .bind(deliver_as_dm)
    .execute(pool)
    .await?;
    Ok(())
}

/// Best-effort creation used by every scraper: constraint or pool errors are
/// logged and swallowed so a bad reminder never breaks message handling.
#[allow(clippy::too_many_arguments)]
pub async fn create_reminder(
    pool: &DbPool,
    user_id: UserId,
    guild_id: Option<i64>,
    channel_id: i64,
    minutes: i64,
    reminder_type: &str,
    info: ReminderInfo,
    deliver_as_dm: bool,
) {
    if let Err(e) = upsert(
        pool,
        user_id,
        guild_id,
        channel_id,
        minutes,
        reminder_type,
        &info,
        deliver_as_dm,
    )
    .await
    {
        tracing::warn!(target: "reminders", kind = reminder_type, error = ?e, "failed to create reminder");
    }
}

/// Due rows at `now`, oldest first, bounded to one poll batch.
pub async fn due_reminders(pool: &DbPool, now: i64, limit: i64) -> Result<Vec<Reminder>, sqlx::Error> {
    sqlx::query_as::<_, Reminder>(
        "SELECT * FROM reminders WHERE due_at <= ? ORDER BY due_at ASC LIMIT ?",
    )
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Earliest future due time, if any reminder exists past `now`.
/// MIN() over an empty set yields one NULL row, hence the nested Option.
pub async fn next_due_after(pool: &DbPool, now: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>("SELECT MIN(due_at) FROM reminders WHERE due_at > ?")
        .bind(now)
        .fetch_one(pool)
        .await
}

/// Push a not-yet-deliverable reminder into the future.
pub async fn push_due(
    pool: &DbPool,
    reminder_type: &str,
    user_id: i64,
    new_due_at: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE reminders SET due_at = ? WHERE type = ? AND user_id = ?")
        .bind(new_due_at)
        .bind(reminder_type)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a delivered or cancelled reminder.
pub async fn delete(pool: &DbPool, reminder_type: &str, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM reminders WHERE type = ? AND user_id = ?")
        .bind(reminder_type)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All pending reminders for one user, soonest first.
pub async fn list_for_user(pool: &DbPool, user_id: UserId) -> Result<Vec<Reminder>, sqlx::Error> {
    sqlx::query_as::<_, Reminder>("SELECT * FROM reminders WHERE user_id = ? ORDER BY due_at ASC")
        .bind(user_id.get() as i64)
        .fetch_all(pool)
        .await
}
