use std::env;

use quartermaster_bot::database::init;
use quartermaster_bot::handler::Handler;
use quartermaster_bot::model::{AppState, ShardManagerContainer};
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id = env::var("SERVER_ID")
        .expect("Expected SERVER_ID in the environment.")
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let allowed_guild_id = GuildId::new(server_id);
    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://quartermaster.db?mode=rwc".to_string());

    let pool = init::connect(&database_url)
        .await
        .expect("Failed to open the database.");
    init::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = AppState::new(pool);

    // Scraping needs message content; everything else arrives as interactions.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(allowed_guild_id))
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
