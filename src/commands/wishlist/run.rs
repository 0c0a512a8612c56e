//! `/wishlist`: open the series wishlist panel.

use super::ui::{self, WishPanelState, PANEL_KIND};
use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use crate::ui::panel;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("wishlist").description("Watch card series and get pinged when they drop")
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

async fn exec(ctx: &Context, cmd: &CommandInteraction, state: Arc<AppState>) -> Result<(), BotError> {
    let token = panel::create_token(cmd.user.id);
    let panel_state = WishPanelState {
        token: token.clone(),
        user_id: cmd.user.id.get() as i64,
        page: 0,
    };
    let (embed, components, _) = ui::render(&state.db, &panel_state).await?;
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
