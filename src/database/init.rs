//! Pool construction and idempotent schema creation.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Alias used throughout the application for the shared connection pool.
pub type DbPool = SqlitePool;

/// Open (creating the file if needed) the SQLite database at `url`.
pub async fn connect(url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new().max_connections(5).connect(url).await
}

/// Create every table the bot uses. Safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS states (
            id           TEXT NOT NULL,
            type         TEXT NOT NULL,
            json_state   TEXT NOT NULL,
            is_permanent INTEGER NOT NULL DEFAULT 0,
            updated_at   INTEGER NOT NULL,
            PRIMARY KEY (id, type)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS reminders (
            type          TEXT NOT NULL,
            user_id       INTEGER NOT NULL,
            guild_id      INTEGER,
            channel_id    INTEGER NOT NULL,
            information   TEXT NOT NULL,
            due_at        INTEGER NOT NULL,
            deliver_as_dm INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (type, user_id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS dank_stats (
            user_id      INTEGER NOT NULL,
            activity     TEXT NOT NULL,
            uses         INTEGER NOT NULL DEFAULT 0,
            coins_earned INTEGER NOT NULL DEFAULT 0,
            updated_at   INTEGER NOT NULL,
            PRIMARY KEY (user_id, activity)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS multipliers (
            user_id INTEGER NOT NULL,
            name    TEXT NOT NULL,
            percent INTEGER NOT NULL,
            PRIMARY KEY (user_id, name)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS wishlists (
            user_id  INTEGER NOT NULL,
            series   TEXT NOT NULL,
            added_at INTEGER NOT NULL,
            PRIMARY KEY (user_id, series)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS nuke_sessions (
            channel_id INTEGER NOT NULL PRIMARY KEY,
            starter_id INTEGER NOT NULL,
            started_at INTEGER NOT NULL,
            drops      INTEGER NOT NULL DEFAULT 0,
            claims     INTEGER NOT NULL DEFAULT 0,
            active     INTEGER NOT NULL DEFAULT 1
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// In-memory pool with the full schema, for tests. A single connection is
/// used because every `:memory:` connection is its own database.
pub async fn connect_in_memory() -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
