//! `/ping`: gateway liveness and heartbeat latency.

use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::{AppState, ShardManagerContainer};
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check that the bot is alive")
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

async fn exec(
    ctx: &Context,
    cmd: &CommandInteraction,
    _state: Arc<AppState>,
) -> Result<(), BotError> {
    let latency = {
        let data = ctx.data.read().await;
        match data.get::<ShardManagerContainer>() {
            Some(shard_manager) => {
                let runners = shard_manager.runners.lock().await;
                runners
                    .get(&ctx.shard_id)
                    .and_then(|runner| runner.latency)
                    .map(|latency| format!("{:.2} ms", latency.as_millis()))
            }
            None => None,
        }
    };
    let response = format!(
        "Pong! Heartbeat latency: `{}`",
        latency.unwrap_or_else(|| "N/A".to_string())
    );
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(response)),
    )
    .await?;
    Ok(())
}
