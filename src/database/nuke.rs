//! Nuke-session counters: one row per channel tracking drops and claims
//! during a mass-drop event. Counter bumps are single atomic UPDATE
//! statements so rapid claims never race each other.

use super::init::DbPool;
use super::models::NukeSession;
use crate::util::now_ms;
use serenity::model::id::UserId;

/// Open (or restart) the session for a channel with zeroed counters.
pub async fn open(pool: &DbPool, channel_id: i64, starter_id: UserId) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO nuke_sessions (channel_id, starter_id, started_at, drops, claims, active)
           VALUES (?, ?, ?, 0, 0, 1)
           ON CONFLICT (channel_id) DO UPDATE SET
             starter_id = excluded.starter_id,
             started_at = excluded.started_at,
             drops = 0, claims = 0, active = 1"#,
    )
    .bind(channel_id)
    .bind(starter_id.get() as i64)
    .bind(now_ms())
    .execute(pool)
    .await?;
    Ok(())
}

/// The active session for a channel, if one is running.
pub async fn active_session(
    pool: &DbPool,
    channel_id: i64,
) -> Result<Option<NukeSession>, sqlx::Error> {
    sqlx::query_as::<_, NukeSession>(
        "SELECT * FROM nuke_sessions WHERE channel_id = ? AND active = 1",
    )
    .bind(channel_id)
    .fetch_optional(pool)
    .await
}

/// Count cards dropped into the channel during an active session.
pub async fn add_drops(pool: &DbPool, channel_id: i64, count: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE nuke_sessions SET drops = drops + ? WHERE channel_id = ? AND active = 1")
        .bind(count)
        .bind(channel_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Count one claim during an active session.
pub async fn add_claim(pool: &DbPool, channel_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE nuke_sessions SET claims = claims + 1 WHERE channel_id = ? AND active = 1")
        .bind(channel_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Close the channel's session, freezing its counters.
pub async fn end(pool: &DbPool, channel_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE nuke_sessions SET active = 0 WHERE channel_id = ? AND active = 1")
        .bind(channel_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
