//! `/reminders`: set, list, and cancel reminders by hand. The scrapers use
//! the same `database::reminders` facility for their automatic timers.

use super::ui;
use crate::database::models::ReminderInfo;
use crate::database::reminders;
use crate::error::BotError;
use crate::interactions::router::BoxFut;
use crate::model::AppState;
use crate::util::{now_ms, relative_timestamp};
use serenity::builder::{
    CreateAutocompleteResponse, CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{
    CommandInteraction, CommandOptionType, ResolvedOption, ResolvedValue,
};
use serenity::prelude::Context;
use std::sync::Arc;

/// Reminder type used for manual reminders; one pending manual reminder per
/// user, like every other type.
const MANUAL_TYPE: &str = "Manual";

pub fn register() -> CreateCommand {
    CreateCommand::new("reminders")
        .description("Manage your game reminders")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "set", "Set a manual reminder")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        "minutes",
                        "How many minutes from now",
                    )
                    .min_int_value(1)
                    .max_int_value(40_320)
                    .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "note",
                        "What to remind you about",
                    )
                    .required(true),
                )
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "dm",
                    "Deliver as a direct message instead of in this channel",
                )),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "Show your pending reminders",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "cancel", "Cancel a reminder")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "type",
                        "Which reminder to cancel",
                    )
                    .set_autocomplete(true)
                    .required(true),
                ),
        )
}

pub fn run_slash<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(exec(ctx, cmd, state))
}

pub fn run_autocomplete<'a>(
    ctx: &'a Context,
    cmd: &'a CommandInteraction,
    state: Arc<AppState>,
) -> BoxFut<'a> {
    Box::pin(autocomplete(ctx, cmd, state))
}

async fn exec(ctx: &Context, cmd: &CommandInteraction, state: Arc<AppState>) -> Result<(), BotError> {
    let options = cmd.data.options();
    let Some(ResolvedOption {
        name,
        value: ResolvedValue::SubCommand(args),
        ..
    }) = options.first()
    else {
        return Err(BotError::InvalidInput("missing subcommand".to_string()));
    };

    match *name {
        "set" => set(ctx, cmd, &state, args).await,
        "list" => list(ctx, cmd, &state).await,
        "cancel" => cancel(ctx, cmd, &state, args).await,
        other => Err(BotError::InvalidInput(format!("unknown subcommand {other}"))),
    }
}

async fn set(
    ctx: &Context,
    cmd: &CommandInteraction,
    state: &AppState,
    args: &[ResolvedOption<'_>],
) -> Result<(), BotError> {
    let mut minutes = 0_i64;
    let mut note = String::new();
    let mut dm = false;
    for opt in args {
        match (opt.name, &opt.value) {
            ("minutes", ResolvedValue::Integer(v)) => minutes = *v,
            ("note", ResolvedValue::String(s)) => note = s.to_string(),
            ("dm", ResolvedValue::Boolean(b)) => dm = *b,
            _ => {}
        }
    }
    if minutes < 1 {
        return Err(BotError::InvalidInput("minutes must be positive".to_string()));
    }

    let info = ReminderInfo {
        command: "/reminders set".to_string(),
        information: note,
    };
    reminders::upsert(
        &state.db,
        cmd.user.id,
        cmd.guild_id.map(|g| g.get() as i64),
        cmd.channel_id.get() as i64,
        minutes,
        MANUAL_TYPE,
        &info,
        dm,
    )
    .await?;
    // A short timer may be due before the scheduler's current sleep elapses.
    state.scheduler_wake.notify_one();

    let due_at = now_ms() + minutes * 60_000;
    respond_ephemeral(
        ctx,
        cmd,
        format!("🔔 Reminder set: I'll ping you {}.", relative_timestamp(due_at)),
    )
    .await
}

async fn list(ctx: &Context, cmd: &CommandInteraction, state: &AppState) -> Result<(), BotError> {
    let rows = reminders::list_for_user(&state.db, cmd.user.id).await?;
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(ui::create_list_embed(&rows))
                .ephemeral(true),
        ),
    )
    .await?;
    Ok(())
}

async fn cancel(
    ctx: &Context,
    cmd: &CommandInteraction,
    state: &AppState,
    args: &[ResolvedOption<'_>],
) -> Result<(), BotError> {
    let Some(kind) = args.iter().find_map(|opt| match (opt.name, &opt.value) {
        ("type", ResolvedValue::String(s)) => Some(s.to_string()),
        _ => None,
    }) else {
        return Err(BotError::InvalidInput("missing reminder type".to_string()));
    };

    let pending = reminders::list_for_user(&state.db, cmd.user.id).await?;
    let message = if pending.iter().any(|r| r.reminder_type == kind) {
        reminders::delete(&state.db, &kind, cmd.user.id.get() as i64).await?;
        format!("🗑️ Cancelled the **{kind}** reminder.")
    } else {
        format!("You have no pending **{kind}** reminder.")
    };
    respond_ephemeral(ctx, cmd, message).await
}

/// Suggest the user's own pending reminder types for `cancel`.
async fn autocomplete(
    ctx: &Context,
    cmd: &CommandInteraction,
    state: Arc<AppState>,
) -> Result<(), BotError> {
    let Some(focused) = cmd.data.autocomplete() else {
        return Ok(());
    };
    let typed = focused.value.to_lowercase();
    let pending = reminders::list_for_user(&state.db, cmd.user.id).await?;

    let mut response = CreateAutocompleteResponse::new();
    for r in pending
        .iter()
        .filter(|r| r.reminder_type.to_lowercase().starts_with(&typed))
        .take(25)
    {
        response = response.add_string_choice(r.reminder_type.clone(), r.reminder_type.clone());
    }
    cmd.create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await?;
    Ok(())
}

async fn respond_ephemeral(
    ctx: &Context,
    cmd: &CommandInteraction,
    content: String,
) -> Result<(), BotError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content(content).ephemeral(true),
        ),
    )
    .await?;
    Ok(())
}
