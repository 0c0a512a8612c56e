//! Shared interaction utility helpers (single defer + safe edit wrapper +
//! ephemeral fallbacks used by the router's error path).

use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, ComponentInteraction, ModalInteraction};
use serenity::prelude::Context;

/// Acknowledge a component interaction ignoring duplicate/late errors.
pub async fn defer_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c.defer(&ctx.http).await {
        tracing::debug!(target: "ui.defer", cid = %c.data.custom_id, error = ?e, "defer failed (already acknowledged?)");
    }
}

/// Edit the original interaction response; logs failure with a tag.
pub async fn edit_component(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    builder: EditInteractionResponse,
) {
    if let Err(e) = c.edit_response(&ctx.http, builder).await {
        tracing::error!(target: "ui.edit", cid = %c.data.custom_id, tag = %tag, error = ?e, "edit_response failed");
    }
}

fn ephemeral_message(text: &str) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(text.to_string())
        .ephemeral(true)
}

fn ephemeral_followup(text: &str) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(text.to_string())
        .ephemeral(true)
}

/// Ephemeral notice on a slash command, falling back to a followup when the
/// interaction was already acknowledged.
pub async fn ephemeral_command_notice(ctx: &Context, cmd: &CommandInteraction, text: &str) {
    if cmd
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(ephemeral_message(text)),
        )
        .await
        .is_err()
    {
        cmd.create_followup(&ctx.http, ephemeral_followup(text)).await.ok();
    }
}

/// Ephemeral notice on a component interaction (ownership rejections, expired
/// panels), same reply-then-followup fallback.
pub async fn ephemeral_component_notice(ctx: &Context, c: &ComponentInteraction, text: &str) {
    if c.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(ephemeral_message(text)),
    )
    .await
    .is_err()
    {
        c.create_followup(&ctx.http, ephemeral_followup(text)).await.ok();
    }
}

/// Ephemeral notice on a modal submit.
pub async fn ephemeral_modal_notice(ctx: &Context, m: &ModalInteraction, text: &str) {
    if m.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(ephemeral_message(text)),
    )
    .await
    .is_err()
    {
        m.create_followup(&ctx.http, ephemeral_followup(text)).await.ok();
    }
}

/// First text-input value of a submitted modal row, by field id.
pub fn modal_field<'a>(m: &'a ModalInteraction, field_id: &str) -> Option<&'a str> {
    use serenity::model::application::ActionRowComponent;
    for row in &m.data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(input) = component {
                if input.custom_id == field_id {
                    return input.value.as_deref();
                }
            }
        }
    }
    None
}
