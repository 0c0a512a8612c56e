//! Buttons attached to delivered reminder notifications: dismiss and
//! "snooze 5 min". The token in the custom id addresses the snooze payload
//! captured at delivery time, because the reminder row itself is already gone.

use crate::constants::SNOOZE_MINUTES;
use crate::database::kv;
use crate::database::models::{ReminderInfo, SnoozePayload};
use crate::database::reminders;
use crate::error::BotError;
use crate::interactions::ids::{self, CustomId};
use crate::interactions::router::BoxFut;
use crate::interactions::util::ephemeral_component_notice;
use crate::model::AppState;
use crate::services::scheduler::SNOOZE_STATE_TYPE;
use crate::util::{now_ms, relative_timestamp};
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
    // The custom id embeds the owning user; a mismatch is rejected before any
    // payload work.
    if let Some(owner) = cid.extra.as_deref().and_then(|raw| raw.parse::<i64>().ok()) {
        if owner != c.user.id.get() as i64 {
            return Err(BotError::NotYourPanel);
        }
    }
    match cid.action.as_str() {
        ids::ACTION_SNOOZE => snooze(ctx, c, &state, &cid.token).await,
        ids::ACTION_DISMISS => dismiss(ctx, c, &state, &cid.token).await,
        _ => Ok(()),
    }
}

async fn load_payload(state: &AppState, token: &str) -> Result<Option<SnoozePayload>, BotError> {
    let Some(json) = kv::get(&state.db, token, SNOOZE_STATE_TYPE).await? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&json).ok())
}

async fn snooze(
    ctx: &Context,
    c: &ComponentInteraction,
    state: &AppState,
    token: &str,
) -> Result<(), BotError> {
    let Some(payload) = load_payload(state, token).await? else {
        ephemeral_component_notice(ctx, c, "⏰ This reminder can no longer be snoozed.").await;
        return Ok(());
    };
    if payload.user_id != c.user.id.get() as i64 {
        return Err(BotError::NotYourPanel);
    }

    let due_at = now_ms() + SNOOZE_MINUTES * 60_000;
    let info: ReminderInfo = serde_json::from_str(&payload.information).unwrap_or_default();
    reminders::upsert_at(
        &state.db,
        payload.user_id,
        payload.guild_id,
        payload.channel_id,
        due_at,
        &payload.reminder_type,
        &info,
        payload.deliver_as_dm,
    )
    .await?;
    // Consumed; leaving it around would only accumulate dead rows.
    kv::delete(&state.db, token, SNOOZE_STATE_TYPE).await?;
    // Wake the poller so the 5-minute due time is observed immediately.
    state.scheduler_wake.notify_one();

    c.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .content(format!(
                    "{}\n💤 Snoozed: due {}",
                    c.message.content,
                    relative_timestamp(due_at)
                ))
                .components(Vec::new()),
        ),
    )
    .await?;
    Ok(())
}

async fn dismiss(
    ctx: &Context,
    c: &ComponentInteraction,
    state: &AppState,
    token: &str,
) -> Result<(), BotError> {
    // Ownership is only enforceable while the payload survives; a swept
    // payload still lets the notification be cleaned up.
    if let Some(payload) = load_payload(state, token).await? {
        if payload.user_id != c.user.id.get() as i64 {
            return Err(BotError::NotYourPanel);
        }
    }

    c.create_response(&ctx.http, CreateInteractionResponse::Acknowledge).await?;
    if let Err(e) = c.message.delete(&ctx.http).await {
        tracing::debug!(target: "ui.reminder", error = ?e, "could not delete notification");
    }
    kv::delete(&state.db, token, SNOOZE_STATE_TYPE).await?;
    Ok(())
}
