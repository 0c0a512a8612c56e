//! `/nuke`: open the nuke-session tracker for the current channel, starting
//! a session if none is running. The 7w7 scraper also opens sessions when it
//! sees a nuke announcement, and feeds the drop/claim counters either way.

use super::ui::{self, NukePanelState, PANEL_KIND};
use crate::database::nuke;
use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use crate::ui::panel;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("nuke").description("Track drops and claims for a nuke in this channel")
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

async fn exec(ctx: &Context, cmd: &CommandInteraction, state: Arc<AppState>) -> Result<(), BotError> {
    let channel_id = cmd.channel_id.get() as i64;
    if nuke::active_session(&state.db, channel_id).await?.is_none() {
        nuke::open(&state.db, channel_id, cmd.user.id).await?;
    }

    let token = panel::create_token(cmd.user.id);
    let panel_state = NukePanelState {
        token: token.clone(),
        user_id: cmd.user.id.get() as i64,
        channel_id,
    };
    let (embed, components) = ui::render(&state.db, &panel_state).await?;
    panel::save_state(&state.db, PANEL_KIND, &token, &panel_state).await?;

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().embed(embed).components(components),
        ),
    )
    .await?;
    Ok(())
}
