//! Component interactions for the `/level` calculator panel.

use crate::commands::level::ui::{self, LevelPanelState, PANEL_KIND};
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
    let mut panel_state: LevelPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    match cid.action.as_str() {
        ids::ACTION_UP => panel_state.target_level += 1,
        ids::ACTION_DOWN => {
            // Floor the target one level above the current one.
            panel_state.target_level =
                (panel_state.target_level - 1).max(panel_state.current_level + 1);
        }
        _ => return Ok(()),
    }

    let (embed, components) = ui::render(&panel_state);
    panel::save_state(&state.db, PANEL_KIND, &panel_state.token, &panel_state).await?;
    c.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(embed).components(components),
        ),
    )
    .await?;
    Ok(())
}
