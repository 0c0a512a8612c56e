//! Component interactions for the `/nuke` tracker panel.

use crate::commands::nuke::ui::{self, NukePanelState, PANEL_KIND};
use crate::database::nuke;
use crate::error::BotError;
use crate::interactions::ids::{self, CustomId};
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use crate::ui::panel;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn handle_button<'a>(
    ctx: &'a Context,
    c: &'a ComponentInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> BoxFut<'a> {
    Box::pin(button(ctx, c, state, cid))
}

async fn button(
    ctx: &Context,
    c: &ComponentInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> Result<(), BotError> {
    let panel_state: NukePanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    match cid.action.as_str() {
        ids::ACTION_REFRESH => {}
        ids::ACTION_END => {
            nuke::end(&state.db, panel_state.channel_id).await?;
            // The panel is done; its state has nothing left to say.
            panel::discard_state(&state.db, PANEL_KIND, &cid.token).await?;
        }
        _ => return Ok(()),
    }

    let (embed, components) = ui::render(&state.db, &panel_state).await?;
    c.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(embed).components(components),
        ),
    )
    .await?;
    Ok(())
}
