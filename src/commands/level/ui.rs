//! View-state and rendering for the `/level` calculator panel. Unlike the
//! other panels this one has no relational backing; everything lives in the
//! token-addressed state.

use super::calc;
use crate::interactions::ids::{self, component_id};
use crate::ui::buttons::Btn;
use crate::ui::panel::OwnedState;
use crate::ui::style::COLOR_PANEL;
use serde::{Deserialize, Serialize};
use serenity::builder::{CreateActionRow, CreateEmbed};

pub const PANEL_KIND: &str = "panel:level";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelPanelState {
    pub token: String,
    pub user_id: i64,
    pub current_level: i64,
    pub current_xp: i64,
    pub target_level: i64,
}

impl OwnedState for LevelPanelState {
    fn owner(&self) -> i64 {
        self.user_id
    }
}

pub fn render(state: &LevelPanelState) -> (CreateEmbed, Vec<CreateActionRow>) {
    let remaining = calc::xp_to_target(state.current_level, state.current_xp, state.target_level);
    let (messages, hunts) = calc::grind_estimate(remaining);

    let embed = CreateEmbed::new()
        .title("📈 Level Calculator")
        .description(format!(
            "Level **{}** ({} XP banked) → level **{}**",
            state.current_level, state.current_xp, state.target_level
        ))
        .field("XP needed", remaining.to_string(), true)
        .field("≈ messages", messages.to_string(), true)
        .field("≈ hunts", hunts.to_string(), true)
        .color(COLOR_PANEL);

    let token = state.token.as_str();
    let components = vec![CreateActionRow::Buttons(vec![
        Btn::narrow(&component_id(ids::ROUTE_LEVEL, ids::ACTION_DOWN, token), "Target −1")
            .disabled(state.target_level <= state.current_level + 1),
        Btn::narrow(&component_id(ids::ROUTE_LEVEL, ids::ACTION_UP, token), "Target +1"),
    ])];

    (embed, components)
}
