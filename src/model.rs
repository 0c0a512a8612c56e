//! Shared application state stored in Serenity's global context.

use crate::database::init::DbPool;
use crate::interactions::router::Router;
use crate::scrapers::{self, Scraper};
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::Notify;

/// A container for the ShardManager, giving access to shard-specific
/// information like gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application. An `Arc<AppState>` is stored
/// in the global context for access from any command or event handler.
pub struct AppState {
    /// The SQLite connection pool.
    pub db: DbPool,
    /// Interaction dispatch tables, wired once at startup.
    pub router: Router,
    /// Wakes the reminder scheduler early (snooze, fresh near-term reminder).
    pub scheduler_wake: Arc<Notify>,
    /// Message scrapers, one per supported source bot.
    pub scrapers: Vec<Box<dyn Scraper>>,
}

impl AppState {
    pub fn new(db: DbPool) -> Arc<Self> {
        Arc::new(Self {
            db,
            router: Router::new(),
            scheduler_wake: Arc::new(Notify::new()),
            scrapers: scrapers::all(),
        })
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
