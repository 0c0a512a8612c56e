//! Generic `(id, type)` -> JSON-string persistence used by every interactive
//! panel and by the snooze mechanism. `id` is a user id, a panel token, or
//! the literal `"global"`.

use super::init::DbPool;
use crate::util::now_ms;

/// Insert or overwrite a value. There is no history; the latest write wins.
pub async fn put(
    pool: &DbPool,
    id: &str,
    state_type: &str,
    json_state: &str,
    is_permanent: bool,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO states (id, type, json_state, is_permanent, updated_at)
           VALUES (?, ?, ?, ?, ?)
           ON CONFLICT (id, type) DO UPDATE SET
             json_state = excluded.json_state,
             is_permanent = excluded.is_permanent,
             updated_at = excluded.updated_at"#,
    )
    .bind(id)
    .bind(state_type)
    .bind(json_state)
    .bind(is_permanent)
    .bind(now_ms())
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetch the stored JSON string, or `None` when absent.
pub async fn get(pool: &DbPool, id: &str, state_type: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT json_state FROM states WHERE id = ? AND type = ?")
        .bind(id)
        .bind(state_type)
        .fetch_optional(pool)
        .await
}

/// Remove a single entry (consumed snooze payloads, closed panels).
pub async fn delete(pool: &DbPool, id: &str, state_type: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM states WHERE id = ? AND type = ?")
        .bind(id)
        .bind(state_type)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete ephemeral entries last touched before `cutoff_ms`. Returns the
/// number of rows removed. Permanent entries are never swept.
pub async fn sweep_ephemeral(pool: &DbPool, cutoff_ms: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM states WHERE is_permanent = 0 AND updated_at < ?")
        .bind(cutoff_ms)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
