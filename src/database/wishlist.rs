//! Karuta series wishlists. Series names are stored lowercased so drop
//! matching and removal share one canonical form.

use super::init::DbPool;
use super::models::WishlistEntry;
use crate::util::now_ms;
use serenity::model::id::UserId;

/// Canonical form used for storage and matching.
pub fn canonical_series(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Add a series to a user's wishlist. Re-adding is a no-op.
pub async fn add(pool: &DbPool, user_id: UserId, series: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO wishlists (user_id, series, added_at) VALUES (?, ?, ?)
           ON CONFLICT (user_id, series) DO NOTHING"#,
    )
    .bind(user_id.get() as i64)
    .bind(canonical_series(series))
    .bind(now_ms())
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove by series name (the stable key). Returns whether a row existed.
pub async fn remove(pool: &DbPool, user_id: UserId, series: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM wishlists WHERE user_id = ? AND series = ?")
        .bind(user_id.get() as i64)
        .bind(canonical_series(series))
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// A user's wishlist, oldest entries first.
pub async fn list_for_user(
    pool: &DbPool,
    user_id: UserId,
) -> Result<Vec<WishlistEntry>, sqlx::Error> {
    sqlx::query_as::<_, WishlistEntry>(
        "SELECT user_id, series, added_at FROM wishlists WHERE user_id = ? ORDER BY added_at, series",
    )
    .bind(user_id.get() as i64)
    .fetch_all(pool)
    .await
}

/// Everyone wishing for `series`, used to ping watchers when a drop matches.
pub async fn users_wishing(pool: &DbPool, series: &str) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM wishlists WHERE series = ?")
        .bind(canonical_series(series))
        .fetch_all(pool)
        .await
}
