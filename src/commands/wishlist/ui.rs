//! View-state and rendering for the `/wishlist` panel.

use crate::constants::PANEL_PAGE_SIZE;
use crate::database::init::DbPool;
use crate::database::wishlist;
use crate::error::BotError;
use crate::interactions::ids::{self, component_id};
use crate::ui::buttons::Btn;
use crate::ui::panel::{self, OwnedState};
use crate::ui::style::{COLOR_PANEL, EMOJI_WISH};
use serde::{Deserialize, Serialize};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::id::UserId;

pub const PANEL_KIND: &str = "panel:wish";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishPanelState {
    pub token: String,
    pub user_id: i64,
    pub page: usize,
}

impl OwnedState for WishPanelState {
    fn owner(&self) -> i64 {
        self.user_id
    }
}

/// Full re-render from the wishlists table. Returns the clamped page index
/// alongside the payload so the caller persists what was actually shown.
pub async fn render(
    pool: &DbPool,
    state: &WishPanelState,
) -> Result<(CreateEmbed, Vec<CreateActionRow>, usize), BotError> {
    let entries = wishlist::list_for_user(pool, UserId::new(state.user_id as u64)).await?;

    let page = panel::clamp_page(state.page, entries.len(), PANEL_PAGE_SIZE);
    let pages = panel::page_count(entries.len(), PANEL_PAGE_SIZE).max(1);
    let visible = panel::page_slice(&entries, page, PANEL_PAGE_SIZE);

    let description = if entries.is_empty() {
        "Your wishlist is empty. Use **Add** to watch a series.".to_string()
    } else {
        visible
            .iter()
            .map(|e| format!("• {}", e.series))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let embed = CreateEmbed::new()
        .title(format!("{EMOJI_WISH} Series Wishlist"))
        .description(description)
        .field("Watched", format!("{}", entries.len()), true)
        .footer(CreateEmbedFooter::new(format!("Page {}/{}", page + 1, pages)))
        .color(COLOR_PANEL);

    let token = state.token.as_str();
    let mut components = vec![CreateActionRow::Buttons(vec![
        Btn::narrow(&component_id(ids::ROUTE_WISH, ids::ACTION_PREV, token), "◀ Prev")
            .disabled(page == 0),
        Btn::narrow(&component_id(ids::ROUTE_WISH, ids::ACTION_NEXT, token), "Next ▶")
            .disabled(page + 1 >= pages),
        Btn::success(&component_id(ids::ROUTE_WISH, ids::ACTION_ADD, token), "Add"),
    ])];

    if !visible.is_empty() {
        let options: Vec<CreateSelectMenuOption> = visible
            .iter()
            // The series string itself is the stable removal key.
            .map(|e| CreateSelectMenuOption::new(e.series.clone(), e.series.clone()))
            .collect();
        components.push(CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                component_id(ids::ROUTE_WISH, ids::ACTION_REMOVE, token),
                CreateSelectMenuKind::String { options },
            )
            .placeholder("Remove from wishlist…")
            .min_values(1)
            .max_values(1),
        ));
    }

    Ok((embed, components, page))
}
