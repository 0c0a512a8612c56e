//! Interaction dispatch.
//!
//! All routing tables are built once at startup by [`Router::new`] from an
//! explicit wiring list; nothing registers itself at import time, so there is
//! no double-registration to guard against. Unknown command names and routes
//! are ignored quietly because stale components on old messages are routine.
//! Handler errors are logged and reported to the user in exactly one place,
//! here.

use crate::error::BotError;
use crate::interactions::ids::{self, CustomId};
use crate::interactions::{
    level_handler, multiplier_handler, nuke_handler, reminder_handler, wishlist_handler,
};
use crate::model::AppState;
use crate::{commands, interactions::util};
use ahash::AHashMap;
use serenity::model::application::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, ModalInteraction,
};
use serenity::prelude::Context;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFut<'a> = Pin<Box<dyn Future<Output = Result<(), BotError>> + Send + 'a>>;

pub type CommandHandler =
    for<'a> fn(&'a Context, &'a CommandInteraction, Arc<AppState>) -> BoxFut<'a>;
pub type AutocompleteHandler = CommandHandler;
pub type ComponentHandler =
    for<'a> fn(&'a Context, &'a ComponentInteraction, Arc<AppState>, CustomId) -> BoxFut<'a>;
pub type ModalHandler =
    for<'a> fn(&'a Context, &'a ModalInteraction, Arc<AppState>, CustomId) -> BoxFut<'a>;

pub struct Router {
    commands: AHashMap<&'static str, CommandHandler>,
    autocomplete: AHashMap<&'static str, AutocompleteHandler>,
    buttons: AHashMap<&'static str, ComponentHandler>,
    selects: AHashMap<&'static str, ComponentHandler>,
    modals: AHashMap<&'static str, ModalHandler>,
}

impl Router {
    /// The single wiring step: every slash command, button route, select
    /// route, and modal route the bot answers to.
    pub fn new() -> Self {
        let mut commands: AHashMap<&'static str, CommandHandler> = AHashMap::new();
        commands.insert("ping", commands::ping::run_slash);
        commands.insert("reminders", commands::reminders::run::run_slash);
        commands.insert("multi", commands::multiplier::run::run_slash);
        commands.insert("wishlist", commands::wishlist::run::run_slash);
        commands.insert("nuke", commands::nuke::run::run_slash);
        commands.insert("level", commands::level::run::run_slash);
        commands.insert("stats", commands::stats::run::run_slash);

        let mut autocomplete: AHashMap<&'static str, AutocompleteHandler> = AHashMap::new();
        autocomplete.insert("reminders", commands::reminders::run::run_autocomplete);

        let mut buttons: AHashMap<&'static str, ComponentHandler> = AHashMap::new();
        buttons.insert(ids::ROUTE_MULTI, multiplier_handler::handle_button);
        buttons.insert(ids::ROUTE_WISH, wishlist_handler::handle_button);
        buttons.insert(ids::ROUTE_NUKE, nuke_handler::handle_button);
        buttons.insert(ids::ROUTE_LEVEL, level_handler::handle_button);
        buttons.insert(ids::ROUTE_REMINDER, reminder_handler::handle_button);

        let mut selects: AHashMap<&'static str, ComponentHandler> = AHashMap::new();
        selects.insert(ids::ROUTE_MULTI, multiplier_handler::handle_select);
        selects.insert(ids::ROUTE_WISH, wishlist_handler::handle_select);

        let mut modals: AHashMap<&'static str, ModalHandler> = AHashMap::new();
        modals.insert(ids::ROUTE_MULTI, multiplier_handler::handle_modal);
        modals.insert(ids::ROUTE_WISH, wishlist_handler::handle_modal);

        Self {
            commands,
            autocomplete,
            buttons,
            selects,
            modals,
        }
    }

    pub async fn dispatch_command(
        &self,
        ctx: &Context,
        cmd: &CommandInteraction,
        state: Arc<AppState>,
    ) {
        let name = cmd.data.name.as_str();
        let Some(handler) = self.commands.get(name) else {
            tracing::debug!(target: "router", command = name, "no handler for command");
            return;
        };
        if let Err(e) = handler(ctx, cmd, state).await {
            tracing::error!(target: "router", command = name, error = %e, "command handler failed");
            util::ephemeral_command_notice(ctx, cmd, &e.user_message()).await;
        }
    }

    pub async fn dispatch_autocomplete(
        &self,
        ctx: &Context,
        cmd: &CommandInteraction,
        state: Arc<AppState>,
    ) {
        let name = cmd.data.name.as_str();
        let Some(handler) = self.autocomplete.get(name) else {
            return;
        };
        if let Err(e) = handler(ctx, cmd, state).await {
            // Autocomplete has no user-visible failure mode worth surfacing.
            tracing::debug!(target: "router", command = name, error = %e, "autocomplete failed");
        }
    }

    pub async fn dispatch_component(
        &self,
        ctx: &Context,
        component: &ComponentInteraction,
        state: Arc<AppState>,
    ) {
        let raw = component.data.custom_id.as_str();
        let Some(cid) = CustomId::parse(raw) else {
            tracing::debug!(target: "router", custom_id = raw, "unparseable custom id ignored");
            return;
        };
        let map = match &component.data.kind {
            ComponentInteractionDataKind::Button => &self.buttons,
            ComponentInteractionDataKind::StringSelect { .. } => &self.selects,
            _ => return,
        };
        let Some(handler) = map.get(cid.route.as_str()) else {
            tracing::debug!(target: "router", custom_id = raw, "unknown route ignored");
            return;
        };
        if let Err(e) = handler(ctx, component, state, cid).await {
            tracing::error!(target: "router", custom_id = raw, error = %e, "component handler failed");
            util::ephemeral_component_notice(ctx, component, &e.user_message()).await;
        }
    }

    pub async fn dispatch_modal(
        &self,
        ctx: &Context,
        modal: &ModalInteraction,
        state: Arc<AppState>,
    ) {
        let raw = modal.data.custom_id.as_str();
        let Some(cid) = CustomId::parse(raw) else {
            tracing::debug!(target: "router", custom_id = raw, "unparseable modal id ignored");
            return;
        };
        let Some(handler) = self.modals.get(cid.route.as_str()) else {
            tracing::debug!(target: "router", custom_id = raw, "unknown modal route ignored");
            return;
        };
        if let Err(e) = handler(ctx, modal, state, cid).await {
            tracing::error!(target: "router", custom_id = raw, error = %e, "modal handler failed");
            util::ephemeral_modal_notice(ctx, modal, &e.user_message()).await;
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
