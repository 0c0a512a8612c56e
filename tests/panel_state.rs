//! Round-trip and ownership behavior of the token-addressed panel state.

use quartermaster_bot::commands::wishlist::ui::{WishPanelState, PANEL_KIND};
use quartermaster_bot::database::{init, kv};
use quartermaster_bot::error::BotError;
use quartermaster_bot::ui::panel;
use serenity::model::id::UserId;

fn sample_state(token: &str, user_id: i64) -> WishPanelState {
    WishPanelState {
        token: token.to_string(),
        user_id,
        page: 2,
    }
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let pool = init::connect_in_memory().await.unwrap();
    let state = sample_state("tok1", 42);
    panel::save_state(&pool, PANEL_KIND, "tok1", &state).await.unwrap();

    let loaded: Option<WishPanelState> =
        panel::load_state(&pool, PANEL_KIND, "tok1").await.unwrap();
    assert_eq!(loaded, Some(state));
}

#[tokio::test]
async fn load_of_unknown_token_is_none() {
    let pool = init::connect_in_memory().await.unwrap();
    let loaded: Option<WishPanelState> =
        panel::load_state(&pool, PANEL_KIND, "missing").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn corrupt_json_loads_as_none_not_an_error() {
    let pool = init::connect_in_memory().await.unwrap();
    kv::put(&pool, "tok2", PANEL_KIND, "{not json", false).await.unwrap();

    let loaded: Option<WishPanelState> =
        panel::load_state(&pool, PANEL_KIND, "tok2").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn load_owned_rejects_foreign_users() {
    let pool = init::connect_in_memory().await.unwrap();
    let state = sample_state("tok3", 42);
    panel::save_state(&pool, PANEL_KIND, "tok3", &state).await.unwrap();

    let result: Result<WishPanelState, _> =
        panel::load_owned(&pool, PANEL_KIND, "tok3", UserId::new(99)).await;
    assert!(matches!(result, Err(BotError::NotYourPanel)));

    // The owner still gets through.
    let owned: WishPanelState = panel::load_owned(&pool, PANEL_KIND, "tok3", UserId::new(42))
        .await
        .unwrap();
    assert_eq!(owned.page, 2);
}

#[tokio::test]
async fn load_owned_reports_expiry() {
    let pool = init::connect_in_memory().await.unwrap();
    let result: Result<WishPanelState, _> =
        panel::load_owned(&pool, PANEL_KIND, "gone", UserId::new(42)).await;
    assert!(matches!(result, Err(BotError::PanelExpired)));
}

#[tokio::test]
async fn overwrites_keep_a_single_row() {
    let pool = init::connect_in_memory().await.unwrap();
    let first = sample_state("tok4", 42);
    let second = WishPanelState { page: 5, ..first.clone() };
    panel::save_state(&pool, PANEL_KIND, "tok4", &first).await.unwrap();
    panel::save_state(&pool, PANEL_KIND, "tok4", &second).await.unwrap();

    let loaded: Option<WishPanelState> =
        panel::load_state(&pool, PANEL_KIND, "tok4").await.unwrap();
    assert_eq!(loaded.map(|s| s.page), Some(5));
}

#[tokio::test]
async fn ephemeral_sweep_spares_permanent_rows() {
    let pool = init::connect_in_memory().await.unwrap();
    kv::put(&pool, "old-ephemeral", "snooze", "{}", false).await.unwrap();
    kv::put(&pool, "old-permanent", "profile", "{}", true).await.unwrap();

    // A cutoff in the future makes every ephemeral row "old".
    let far_future = quartermaster_bot::util::now_ms() + 1_000_000;
    let swept = kv::sweep_ephemeral(&pool, far_future).await.unwrap();
    assert_eq!(swept, 1);

    assert!(kv::get(&pool, "old-ephemeral", "snooze").await.unwrap().is_none());
    assert!(kv::get(&pool, "old-permanent", "profile").await.unwrap().is_some());
}
