//! Scraped Dank Memer activity totals (work shifts, adventures, dailies).

use super::init::DbPool;
use super::models::DankStat;
use crate::util::now_ms;
use serenity::model::id::UserId;

/// Record one occurrence of an activity and the coins it paid out.
/// Uses an atomic counter update so interleaved scrapes never lose counts.
pub async fn record_activity(
    pool: &DbPool,
    user_id: UserId,
    activity: &str,
    coins: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"INSERT INTO dank_stats (user_id, activity, uses, coins_earned, updated_at)
           VALUES (?, ?, 1, ?, ?)
           ON CONFLICT (user_id, activity) DO UPDATE SET
             uses = dank_stats.uses + 1,
             coins_earned = dank_stats.coins_earned + excluded.coins_earned,
             updated_at = excluded.updated_at"#,
    )
    .bind(user_id.get() as i64)
    .bind(activity)
    .bind(coins)
    .bind(now_ms())
    .execute(pool)
    .await?;
    Ok(())
}

/// All tracked activities for one user, most used first.
pub async fn stats_for_user(pool: &DbPool, user_id: UserId) -> Result<Vec<DankStat>, sqlx::Error> {
    sqlx::query_as::<_, DankStat>(
        "SELECT user_id, activity, uses, coins_earned FROM dank_stats
         WHERE user_id = ? ORDER BY uses DESC, activity",
    )
    .bind(user_id.get() as i64)
    .fetch_all(pool)
    .await
}
