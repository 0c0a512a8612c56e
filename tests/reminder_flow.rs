//! Reminder table semantics: the insert-or-replace key, due-batch selection,
//! retry pushes, and the snooze re-queue path.

use quartermaster_bot::constants::SNOOZE_MINUTES;
use quartermaster_bot::database::models::ReminderInfo;
use quartermaster_bot::database::{init, reminders};
use quartermaster_bot::util::now_ms;
use serenity::model::id::UserId;

fn visit_info() -> ReminderInfo {
    ReminderInfo {
        command: "kvi".to_string(),
        information: "Your visit charge is back.".to_string(),
    }
}

#[tokio::test]
async fn karuta_visit_delivers_once_and_clears() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(1111);
    reminders::upsert(&pool, user, Some(7), 99, 600, "Karuta Visit", &visit_info(), false)
        .await
        .unwrap();

    // Nothing is due before the 600 minutes elapse.
    let due_now = reminders::due_reminders(&pool, now_ms(), 20).await.unwrap();
    assert!(due_now.is_empty());

    // Simulated clock 601 minutes later: exactly one row due.
    let later = now_ms() + 601 * 60_000;
    let due = reminders::due_reminders(&pool, later, 20).await.unwrap();
    assert_eq!(due.len(), 1);
    let row = &due[0];
    assert_eq!(row.reminder_type, "Karuta Visit");
    assert_eq!(row.user_id, 1111);
    let info: ReminderInfo = serde_json::from_str(&row.information).unwrap();
    assert_eq!(info, visit_info());

    // Successful delivery deletes the row; nothing remains for the pair.
    reminders::delete(&pool, &row.reminder_type, row.user_id).await.unwrap();
    assert!(reminders::due_reminders(&pool, later, 20).await.unwrap().is_empty());
    assert!(reminders::list_for_user(&pool, user).await.unwrap().is_empty());
}

#[tokio::test]
async fn same_type_and_user_overwrites() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(2222);
    reminders::upsert(&pool, user, None, 5, 10, "Dank Daily", &ReminderInfo::default(), false)
        .await
        .unwrap();
    reminders::upsert(&pool, user, None, 5, 90, "Dank Daily", &ReminderInfo::default(), true)
        .await
        .unwrap();

    let rows = reminders::list_for_user(&pool, user).await.unwrap();
    assert_eq!(rows.len(), 1);
    // The second call won: ~90 minutes out and flipped to DM delivery.
    let expected = now_ms() + 90 * 60_000;
    assert!((rows[0].due_at - expected).abs() < 5_000);
    assert!(rows[0].deliver_as_dm);
}

#[tokio::test]
async fn different_types_coexist_for_one_user() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(3333);
    reminders::upsert(&pool, user, None, 5, 10, "Karuta Visit", &ReminderInfo::default(), false)
        .await
        .unwrap();
    reminders::upsert(&pool, user, None, 5, 10, "Izzi Raid", &ReminderInfo::default(), false)
        .await
        .unwrap();

    assert_eq!(reminders::list_for_user(&pool, user).await.unwrap().len(), 2);
}

#[tokio::test]
async fn push_due_moves_a_failed_delivery_forward() {
    let pool = init::connect_in_memory().await.unwrap();
    let user = UserId::new(4444);
    reminders::upsert(&pool, user, None, 5, 1, "Manual", &ReminderInfo::default(), false)
        .await
        .unwrap();
    let before = reminders::list_for_user(&pool, user).await.unwrap()[0].due_at;

    reminders::push_due(&pool, "Manual", 4444, before + 60_000).await.unwrap();
    let after = reminders::list_for_user(&pool, user).await.unwrap()[0].due_at;
    assert_eq!(after, before + 60_000);
}

#[tokio::test]
async fn due_batch_is_bounded_and_oldest_first() {
    let pool = init::connect_in_memory().await.unwrap();
    for i in 0..5_i64 {
        reminders::upsert_at(
            &pool,
            5000 + i,
            None,
            5,
            1_000 + i, // already in the past, staggered
            "Manual",
            &ReminderInfo::default(),
            false,
        )
        .await
        .unwrap();
    }
    let due = reminders::due_reminders(&pool, now_ms(), 3).await.unwrap();
    assert_eq!(due.len(), 3);
    assert!(due.windows(2).all(|w| w[0].due_at <= w[1].due_at));
    assert_eq!(due[0].user_id, 5000);
}

#[tokio::test]
async fn next_due_after_skips_past_rows() {
    let pool = init::connect_in_memory().await.unwrap();
    let now = now_ms();
    assert_eq!(reminders::next_due_after(&pool, now).await.unwrap(), None);

    reminders::upsert_at(&pool, 6001, None, 5, now - 1_000, "A", &ReminderInfo::default(), false)
        .await
        .unwrap();
    reminders::upsert_at(&pool, 6002, None, 5, now + 50_000, "B", &ReminderInfo::default(), false)
        .await
        .unwrap();
    reminders::upsert_at(&pool, 6003, None, 5, now + 90_000, "C", &ReminderInfo::default(), false)
        .await
        .unwrap();

    assert_eq!(reminders::next_due_after(&pool, now).await.unwrap(), Some(now + 50_000));
}

#[tokio::test]
async fn snooze_requeues_five_minutes_out_regardless_of_origin() {
    let pool = init::connect_in_memory().await.unwrap();
    // Simulates the snooze button: an absolute re-insert after delivery
    // deleted the original row, whatever its original due time was.
    let now = now_ms();
    let due_at = now + SNOOZE_MINUTES * 60_000;
    reminders::upsert_at(&pool, 7001, Some(7), 99, due_at, "Karuta Visit", &visit_info(), false)
        .await
        .unwrap();

    let rows = reminders::list_for_user(&pool, UserId::new(7001)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].due_at, due_at);
    assert!(rows[0].due_at - now >= 5 * 60_000);
}
