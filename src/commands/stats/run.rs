//! `/stats`: show the invoking user's scraped activity totals.

use super::ui;
use crate::database::dank;
use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("stats").description("Your tracked game activity and earnings")
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

async fn exec(ctx: &Context, cmd: &CommandInteraction, state: Arc<AppState>) -> Result<(), BotError> {
    let stats = dank::stats_for_user(&state.db, cmd.user.id).await?;
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(ui::create_stats_embed(&stats))
                .ephemeral(true),
        ),
    )
    .await?;
    Ok(())
}
