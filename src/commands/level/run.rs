//! `/level`: open the level calculator panel.

use super::ui::{self, LevelPanelState, PANEL_KIND};
use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use crate::ui::panel;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType, ResolvedValue};
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("level")
        .description("Estimate the grind to a target level")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "level", "Your current level")
                .min_int_value(0)
                .max_int_value(10_000)
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "xp", "XP banked toward the next level")
                .min_int_value(0),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "target", "Target level")
                .min_int_value(1)
                .max_int_value(10_000),
        )
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

async fn exec(ctx: &Context, cmd: &CommandInteraction, state: Arc<AppState>) -> Result<(), BotError> {
    let mut current_level = 0_i64;
    let mut current_xp = 0_i64;
    let mut target_level = None;
    for opt in cmd.data.options() {
        match (opt.name, &opt.value) {
            ("level", ResolvedValue::Integer(v)) => current_level = *v,
            ("xp", ResolvedValue::Integer(v)) => current_xp = *v,
            ("target", ResolvedValue::Integer(v)) => target_level = Some(*v),
            _ => {}
        }
    }
    let target_level = target_level.unwrap_or(current_level + 1).max(current_level + 1);

    let token = panel::create_token(cmd.user.id);
    let panel_state = LevelPanelState {
        token: token.clone(),
        user_id: cmd.user.id.get() as i64,
        current_level,
        current_xp,
        target_level,
    };
    let (embed, components) = ui::render(&panel_state);
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
