//! Named percentage multipliers tracked per user for the `/multi` calculator.
//! The multiplier name is the stable key for every edit and removal.

use super::init::DbPool;
use super::models::Multiplier;
use serenity::model::id::UserId;

/// Add a multiplier or update the percentage of an existing one.
pub async fn upsert(
    pool: &DbPool,
    user_id: UserId,
    name: &str,
    percent: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO multipliers (user_id, name, percent) VALUES (?, ?, ?)
           ON CONFLICT (user_id, name) DO UPDATE SET percent = excluded.percent"#,
    )
    .bind(user_id.get() as i64)
    .bind(name)
    .bind(percent)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove by name. Returns whether a row actually existed.
pub async fn remove(pool: &DbPool, user_id: UserId, name: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM multipliers WHERE user_id = ? AND name = ?")
        .bind(user_id.get() as i64)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Every multiplier for one user, alphabetical. Render and handlers both go
/// through this single ordering.
pub async fn list_for_user(pool: &DbPool, user_id: UserId) -> Result<Vec<Multiplier>, sqlx::Error> {
    sqlx::query_as::<_, Multiplier>(
        "SELECT user_id, name, percent FROM multipliers WHERE user_id = ? ORDER BY name",
    )
    .bind(user_id.get() as i64)
    .fetch_all(pool)
    .await
}

/// Sum of all percentages for the panel's total line.
pub async fn total_percent(pool: &DbPool, user_id: UserId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>(
        "SELECT SUM(percent) FROM multipliers WHERE user_id = ?",
    )
    .bind(user_id.get() as i64)
    .fetch_one(pool)
    .await
    .map(|sum| sum.unwrap_or(0))
}
