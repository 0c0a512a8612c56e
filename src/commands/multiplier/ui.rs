//! View-state and rendering for the `/multi` multiplier calculator panel.
//!
//! The panel is always recomputed in full from the multipliers table plus the
//! small UI-only state below; nothing is diffed incrementally.

use crate::constants::PANEL_PAGE_SIZE;
use crate::database::init::DbPool;
use crate::database::multipliers;
use crate::error::BotError;
use crate::interactions::ids::{self, component_id};
use crate::ui::buttons::Btn;
use crate::ui::panel::{self, OwnedState};
use crate::ui::style::{COLOR_PANEL, EMOJI_COIN};
use serde::{Deserialize, Serialize};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::id::UserId;

pub const PANEL_KIND: &str = "panel:multi";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MultiPanelState {
    pub token: String,
    pub user_id: i64,
    pub page: usize,
}

impl OwnedState for MultiPanelState {
    fn owner(&self) -> i64 {
        self.user_id
    }
}

/// Render the panel from persisted multipliers. Returns the embed, the
/// component rows, and the page index actually shown (clamped, so the caller
/// can persist it back).
pub async fn render(
    pool: &DbPool,
    state: &MultiPanelState,
) -> Result<(CreateEmbed, Vec<CreateActionRow>, usize), BotError> {
    let owner = UserId::new(state.user_id as u64);
    let rows = multipliers::list_for_user(pool, owner).await?;
    let total = multipliers::total_percent(pool, owner).await?;

    let page = panel::clamp_page(state.page, rows.len(), PANEL_PAGE_SIZE);
    let pages = panel::page_count(rows.len(), PANEL_PAGE_SIZE).max(1);
    let visible = panel::page_slice(&rows, page, PANEL_PAGE_SIZE);

    let description = if rows.is_empty() {
        "No multipliers tracked yet. Use **Add** to record one.".to_string()
    } else {
        visible
            .iter()
            .map(|m| format!("• **{}**: +{}%", m.name, m.percent))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let embed = CreateEmbed::new()
        .title(format!("{EMOJI_COIN} Multiplier Calculator"))
        .description(description)
        .field("Total", format!("**+{total}%**"), true)
        .footer(CreateEmbedFooter::new(format!("Page {}/{}", page + 1, pages)))
        .color(COLOR_PANEL);

    let token = state.token.as_str();
    let mut components = vec![CreateActionRow::Buttons(vec![
        Btn::narrow(&component_id(ids::ROUTE_MULTI, ids::ACTION_PREV, token), "◀ Prev")
            .disabled(page == 0),
        Btn::narrow(&component_id(ids::ROUTE_MULTI, ids::ACTION_NEXT, token), "Next ▶")
            .disabled(page + 1 >= pages),
        Btn::success(&component_id(ids::ROUTE_MULTI, ids::ACTION_ADD, token), "Add"),
    ])];

    if !visible.is_empty() {
        let options: Vec<CreateSelectMenuOption> = visible
            .iter()
            .map(|m| {
                CreateSelectMenuOption::new(
                    format!("{} (+{}%)", m.name, m.percent),
                    // The name is the stable key; removals never go by index.
                    m.name.clone(),
                )
            })
            .collect();
        components.push(CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                component_id(ids::ROUTE_MULTI, ids::ACTION_REMOVE, token),
                CreateSelectMenuKind::String { options },
            )
            .placeholder("Remove a multiplier…")
            .min_values(1)
            .max_values(1),
        ));
    }

    Ok((embed, components, page))
}
