//! Serenity event handler: the single entry point for interactions and
//! messages. Everything fans out through the router or the scraper roster.

use crate::model::AppState;
use crate::services::scheduler;
use crate::{commands, scrapers};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct Handler {
    pub allowed_guild_id: GuildId,
    /// `ready` fires again on reconnect; the poller must only start once.
    scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(allowed_guild_id: GuildId) -> Self {
        Self {
            allowed_guild_id,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        match &interaction {
            Interaction::Command(cmd) => {
                app_state.router.dispatch_command(&ctx, cmd, app_state.clone()).await;
            }
            Interaction::Autocomplete(cmd) => {
                app_state
                    .router
                    .dispatch_autocomplete(&ctx, cmd, app_state.clone())
                    .await;
            }
            Interaction::Component(component) => {
                app_state
                    .router
                    .dispatch_component(&ctx, component, app_state.clone())
                    .await;
            }
            Interaction::Modal(modal) => {
                app_state.router.dispatch_modal(&ctx, modal, app_state.clone()).await;
            }
            _ => {}
        }
    }

    /// Only bot-authored messages in the home guild are interesting: they are
    /// the scrapers' input. Human chatter is ignored entirely.
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || !msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        scrapers::dispatch(&ctx, &msg, &app_state).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "handler", name = %ready.user.name, "connected and ready");

        let commands_to_register = vec![
            commands::ping::register(),
            commands::reminders::run::register(),
            commands::multiplier::run::register(),
            commands::wishlist::run::register(),
            commands::nuke::run::register(),
            commands::level::run::register(),
            commands::stats::run::register(),
        ];
        if let Err(e) = self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            tracing::error!(target: "handler", error = ?e, "error creating guild commands");
        } else {
            tracing::info!(target: "handler", "guild commands registered");
        }

        if !self.scheduler_started.swap(true, Ordering::SeqCst) {
            if let Some(app_state) = AppState::from_ctx(&ctx).await {
                scheduler::spawn(ctx.http.clone(), ctx.cache.clone(), app_state);
            }
        }
    }
}
