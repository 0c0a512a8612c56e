//! View-state and rendering for the `/nuke` session tracker panel.

use crate::database::init::DbPool;
use crate::database::nuke;
use crate::error::BotError;
use crate::interactions::ids::{self, component_id};
use crate::ui::buttons::Btn;
use crate::ui::panel::OwnedState;
use crate::ui::style::{COLOR_NUKE, EMOJI_NUKE};
use crate::util::relative_timestamp;
use serde::{Deserialize, Serialize};
use serenity::builder::{CreateActionRow, CreateEmbed};

pub const PANEL_KIND: &str = "panel:nuke";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NukePanelState {
    pub token: String,
    pub user_id: i64,
    pub channel_id: i64,
}

impl OwnedState for NukePanelState {
    fn owner(&self) -> i64 {
        self.user_id
    }
}

/// Re-render the tracker from the channel's session row. A session that was
/// ended (or never existed) renders as a closed summary with no controls.
pub async fn render(
    pool: &DbPool,
    state: &NukePanelState,
) -> Result<(CreateEmbed, Vec<CreateActionRow>), BotError> {
    let session = nuke::active_session(pool, state.channel_id).await?;

    let token = state.token.as_str();
    match session {
        Some(s) => {
            let embed = CreateEmbed::new()
                .title(format!("{EMOJI_NUKE} Nuke Tracker"))
                .description(format!(
                    "Session opened {} by <@{}>",
                    relative_timestamp(s.started_at),
                    s.starter_id as u64
                ))
                .field("Cards dropped", s.drops.to_string(), true)
                .field("Claims", s.claims.to_string(), true)
                .color(COLOR_NUKE);
            let components = vec![CreateActionRow::Buttons(vec![
                Btn::secondary(
                    &component_id(ids::ROUTE_NUKE, ids::ACTION_REFRESH, token),
                    "Refresh",
                ),
                Btn::danger(&component_id(ids::ROUTE_NUKE, ids::ACTION_END, token), "End"),
            ])];
            Ok((embed, components))
        }
        None => {
            let embed = CreateEmbed::new()
                .title(format!("{EMOJI_NUKE} Nuke Tracker"))
                .description("No active session in this channel.")
                .color(COLOR_NUKE);
            Ok((embed, Vec::new()))
        }
    }
}
