//! Domain-table behavior backing the panels: multipliers, wishlists, dank
//! stats, and nuke counters.

use quartermaster_bot::database::{dank, init, multipliers, nuke, wishlist};
use serenity::model::id::UserId;

#[tokio::test]
async fn multiplier_upsert_and_total() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(10);
    multipliers::upsert(&pool, user, "Premium", 15).await.unwrap();
    multipliers::upsert(&pool, user, "Pet", 5).await.unwrap();
    // Same name updates in place instead of duplicating.
    multipliers::upsert(&pool, user, "Premium", 20).await.unwrap();

    let rows = multipliers::list_for_user(&pool, user).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(multipliers::total_percent(&pool, user).await.unwrap(), 25);

    assert!(multipliers::remove(&pool, user, "Pet").await.unwrap());
    assert!(!multipliers::remove(&pool, user, "Pet").await.unwrap());
    assert_eq!(multipliers::total_percent(&pool, user).await.unwrap(), 20);
}

#[tokio::test]
async fn total_percent_is_zero_without_rows() {
    let pool = init::connect_in_memory().await.unwrap();
    assert_eq!(multipliers::total_percent(&pool, UserId::new(11)).await.unwrap(), 0);
}

#[tokio::test]
async fn wishlist_matching_is_case_insensitive() {
    let pool = init::connect_in_memory().await.unwrap();
    wishlist::add(&pool, UserId::new(20), "Spice and Wolf").await.unwrap();
    wishlist::add(&pool, UserId::new(21), "SPICE AND WOLF").await.unwrap();
    wishlist::add(&pool, UserId::new(21), "Initial D").await.unwrap();

    let wishers = wishlist::users_wishing(&pool, "spice and wolf").await.unwrap();
    assert_eq!(wishers.len(), 2);

    // Removal goes by the same canonical key the panel select carries.
    assert!(wishlist::remove(&pool, UserId::new(21), "Spice And Wolf").await.unwrap());
    let wishers = wishlist::users_wishing(&pool, "Spice and Wolf").await.unwrap();
    assert_eq!(wishers, vec![20]);
}

#[tokio::test]
async fn dank_stats_accumulate_atomically() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(30);
    dank::record_activity(&pool, user, "Work", 1_000).await.unwrap();
    dank::record_activity(&pool, user, "Work", 2_500).await.unwrap();
    dank::record_activity(&pool, user, "Adventure", 400).await.unwrap();

    let stats = dank::stats_for_user(&pool, user).await.unwrap();
    assert_eq!(stats.len(), 2);
    let work = stats.iter().find(|s| s.activity == "Work").unwrap();
    assert_eq!(work.uses, 2);
    assert_eq!(work.coins_earned, 3_500);
}

#[tokio::test]
async fn nuke_session_lifecycle() {
    let pool = init::connect_in_memory().await.unwrap();
    let channel = 555_i64;
    assert!(nuke::active_session(&pool, channel).await.unwrap().is_none());

    nuke::open(&pool, channel, UserId::new(40)).await.unwrap();
    nuke::add_drops(&pool, channel, 12).await.unwrap();
    nuke::add_claim(&pool, channel).await.unwrap();
    nuke::add_claim(&pool, channel).await.unwrap();

    let session = nuke::active_session(&pool, channel).await.unwrap().unwrap();
    assert_eq!(session.drops, 12);
    assert_eq!(session.claims, 2);
    assert_eq!(session.starter_id, 40);

    assert!(nuke::end(&pool, channel).await.unwrap());
    assert!(nuke::active_session(&pool, channel).await.unwrap().is_none());
    // Counters on a closed session stay frozen.
    nuke::add_claim(&pool, channel).await.unwrap();
    assert!(!nuke::end(&pool, channel).await.unwrap());

    // Re-opening resets the counters for the new event.
    nuke::open(&pool, channel, UserId::new(41)).await.unwrap();
    let fresh = nuke::active_session(&pool, channel).await.unwrap().unwrap();
    assert_eq!((fresh.drops, fresh.claims), (0, 0));
}
