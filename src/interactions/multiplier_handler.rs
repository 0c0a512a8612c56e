//! Component interactions for the `/multi` panel family.

use crate::commands::multiplier::ui::{self, MultiPanelState, PANEL_KIND};
use crate::database::multipliers;
use crate::error::BotError;
use crate::interactions::ids::{self, CustomId};
use crate::interactions::router::BoxFut;
use crate::interactions::util::modal_field;
use crate::model::AppState;
use crate::ui::panel;
use serenity::builder::{
    CreateActionRow, CreateInputText, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateModal,
};
use serenity::model::application::{
    ComponentInteraction, ComponentInteractionDataKind, InputTextStyle, ModalInteraction,
};
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

pub fn handle_select<'a>(
    ctx: &'a Context,
    c: &'a ComponentInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> BoxFut<'a> {
    Box::pin(select(ctx, c, state, cid))
}

pub fn handle_modal<'a>(
    ctx: &'a Context,
    m: &'a ModalInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> BoxFut<'a> {
    Box::pin(modal(ctx, m, state, cid))
}

async fn button(
    ctx: &Context,
    c: &ComponentInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> Result<(), BotError> {
    let mut panel_state: MultiPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    match cid.action.as_str() {
        ids::ACTION_PREV => panel_state.page = panel_state.page.saturating_sub(1),
        ids::ACTION_NEXT => panel_state.page += 1,
        ids::ACTION_ADD => {
            // Modal must be the first response; no defer beforehand.
            let modal = CreateModal::new(
                CustomId::new(ids::ROUTE_MULTI, ids::ACTION_ADD, &cid.token).encode(),
                "Add a multiplier",
            )
            .components(vec![
                CreateActionRow::InputText(
                    CreateInputText::new(InputTextStyle::Short, "Name", "name")
                        .placeholder("e.g. Premium")
                        .required(true),
                ),
                CreateActionRow::InputText(
                    CreateInputText::new(InputTextStyle::Short, "Percent", "percent")
                        .placeholder("e.g. 15")
                        .required(true),
                ),
            ]);
            c.create_response(&ctx.http, CreateInteractionResponse::Modal(modal)).await?;
            return Ok(());
        }
        _ => return Ok(()),
    }

    rerender(ctx, c, &state, panel_state).await
}

async fn select(
    ctx: &Context,
    c: &ComponentInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> Result<(), BotError> {
    if cid.action != ids::ACTION_REMOVE {
        return Ok(());
    }
    let panel_state: MultiPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    let ComponentInteractionDataKind::StringSelect { values } = &c.data.kind else {
        return Ok(());
    };
    if let Some(name) = values.first() {
        // The select value is the multiplier's name, so no index drift.
        multipliers::remove(&state.db, c.user.id, name).await?;
    }

    rerender(ctx, c, &state, panel_state).await
}

async fn modal(
    ctx: &Context,
    m: &ModalInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> Result<(), BotError> {
    let panel_state: MultiPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, m.user.id).await?;

    let name = modal_field(m, "name")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BotError::InvalidInput("multiplier name is required".to_string()))?;
    let percent: i64 = modal_field(m, "percent")
        .and_then(|s| s.trim().trim_end_matches('%').parse().ok())
        .ok_or_else(|| BotError::InvalidInput("percent must be a whole number".to_string()))?;
    if !(0..=10_000).contains(&percent) {
        return Err(BotError::InvalidInput("percent is out of range".to_string()));
    }

    multipliers::upsert(&state.db, m.user.id, name, percent).await?;

    let (embed, components, shown_page) = ui::render(&state.db, &panel_state).await?;
    let updated = MultiPanelState {
        page: shown_page,
        ..panel_state
    };
    panel::save_state(&state.db, PANEL_KIND, &updated.token, &updated).await?;
    m.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(embed).components(components),
        ),
    )
    .await?;
    Ok(())
}

/// Re-render after a mutation, persisting the clamped page the user actually
/// sees.
async fn rerender(
    ctx: &Context,
    c: &ComponentInteraction,
    state: &AppState,
    panel_state: MultiPanelState,
) -> Result<(), BotError> {
    let (embed, components, shown_page) = ui::render(&state.db, &panel_state).await?;
    let updated = MultiPanelState {
        page: shown_page,
        ..panel_state
    };
    panel::save_state(&state.db, PANEL_KIND, &updated.token, &updated).await?;
    c.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(embed).components(components),
        ),
    )
    .await?;
    Ok(())
}
