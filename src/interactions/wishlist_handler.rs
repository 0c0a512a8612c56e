//! Component interactions for the `/wishlist` panel family.

use crate::commands::wishlist::ui::{self, WishPanelState, PANEL_KIND};
use crate::database::wishlist;
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
    let mut panel_state: WishPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    match cid.action.as_str() {
        ids::ACTION_PREV => panel_state.page = panel_state.page.saturating_sub(1),
        ids::ACTION_NEXT => panel_state.page += 1,
        ids::ACTION_ADD => {
            let modal = CreateModal::new(
                CustomId::new(ids::ROUTE_WISH, ids::ACTION_ADD, &cid.token).encode(),
                "Add to wishlist",
            )
            .components(vec![CreateActionRow::InputText(
                CreateInputText::new(InputTextStyle::Short, "Series", "series")
                    .placeholder("e.g. Spice and Wolf")
                    .required(true),
            )]);
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
    let panel_state: WishPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, c.user.id).await?;

    let ComponentInteractionDataKind::StringSelect { values } = &c.data.kind else {
        return Ok(());
    };
    if let Some(series) = values.first() {
        wishlist::remove(&state.db, c.user.id, series).await?;
    }

    rerender(ctx, c, &state, panel_state).await
}

async fn modal(
    ctx: &Context,
    m: &ModalInteraction,
    state: Arc<AppState>,
    cid: CustomId,
) -> Result<(), BotError> {
    let panel_state: WishPanelState =
        panel::load_owned(&state.db, PANEL_KIND, &cid.token, m.user.id).await?;

    let series = modal_field(m, "series")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BotError::InvalidInput("series name is required".to_string()))?;
    wishlist::add(&state.db, m.user.id, series).await?;

    let (embed, components, shown_page) = ui::render(&state.db, &panel_state).await?;
    let updated = WishPanelState {
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

async fn rerender(
    ctx: &Context,
    c: &ComponentInteraction,
    state: &AppState,
    panel_state: WishPanelState,
) -> Result<(), BotError> {
    let (embed, components, shown_page) = ui::render(&state.db, &panel_state).await?;
    let updated = WishPanelState {
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
