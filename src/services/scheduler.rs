//! The reminder poller.
//!
//! One task per process. Each cycle drains a bounded batch of due rows and
//! rearms itself with an adaptive delay: near-immediate after a clean drain
//! (there may be backlog), a little longer after failures, and otherwise
//! sleeping until the next known due time. The `Notify` handle in `AppState`
//! cuts any sleep short, which is how a snooze's 5-minute timer gets picked
//! up without waiting out a long idle delay.
//!
//! Every due row leaves a cycle either deleted (delivered) or pushed into the
//! future (failed); nothing is left due-and-untouched, so a broken delivery
//! can never spin the poller.

use crate::constants::{
    DELIVERY_RETRY_PUSH_MS, EPHEMERAL_STATE_TTL_MS, POLL_DELAY_DRAIN_MS, POLL_DELAY_IDLE_MS,
    POLL_DELAY_MAX_MS, POLL_DELAY_MIN_MS, POLL_DELAY_RETRY_MS, REMINDER_BATCH_SIZE,
};
use crate::database::kv;
use crate::database::models::{Reminder, ReminderInfo, SnoozePayload};
use crate::database::reminders;
use crate::error::BotError;
use crate::interactions::ids::{self, CustomId};
use crate::model::AppState;
use crate::ui::buttons::Btn;
use crate::ui::panel;
use crate::ui::style::EMOJI_BELL;
use crate::util::now_ms;
use serenity::builder::{CreateActionRow, CreateMessage};
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::id::{ChannelId, UserId};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// KV `type` under which delivery-time snooze payloads are stored.
pub const SNOOZE_STATE_TYPE: &str = "snooze";

/// What one poll cycle observed; drives the next delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Due rows existed and every one was delivered.
    Delivered,
    /// Due rows existed and at least one delivery failed.
    PartialFailure,
    /// Nothing was due; `next_due` is the earliest future due time, if any.
    NoneDue { next_due: Option<i64> },
}

/// Adaptive rearm delay. Pure so the policy is testable without a clock.
pub fn next_delay(outcome: &CycleOutcome, now: i64) -> Duration {
    let millis = match outcome {
        CycleOutcome::Delivered => POLL_DELAY_DRAIN_MS,
        CycleOutcome::PartialFailure => POLL_DELAY_RETRY_MS,
        CycleOutcome::NoneDue { next_due: Some(due) } => {
            let until = (*due - now).max(0) as u64;
            until.clamp(POLL_DELAY_MIN_MS, POLL_DELAY_MAX_MS)
        }
        CycleOutcome::NoneDue { next_due: None } => POLL_DELAY_IDLE_MS,
    };
    Duration::from_millis(millis)
}

/// Start the poller. The task never exits: every cycle error is caught,
/// logged, and followed by a rearm at the default delay.
pub fn spawn(http: Arc<Http>, cache: Arc<Cache>, state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let wake = state.scheduler_wake.clone();
        let mut delay = Duration::from_millis(POLL_DELAY_MIN_MS);
        tracing::info!(target: "scheduler", "reminder poller started");
        loop {
            tokio::select! {
                _ = sleep(delay) => {}
                _ = wake.notified() => {
                    tracing::debug!(target: "scheduler", "woken early");
                }
            }
            let outcome = match poll_cycle(&http, &cache, &state).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(target: "scheduler", error = %e, "poll cycle failed");
                    CycleOutcome::NoneDue { next_due: None }
                }
            };
            delay = next_delay(&outcome, now_ms());
            tracing::debug!(target: "scheduler", ?outcome, ?delay, "rearmed");
        }
    })
}

/// One pass over the due batch. Idle cycles double as housekeeping: expired
/// ephemeral KV rows (consumed or abandoned snooze payloads, dead panel
/// state) are swept out here.
async fn poll_cycle(
    http: &Http,
    cache: &Cache,
    state: &AppState,
) -> Result<CycleOutcome, BotError> {
    let now = now_ms();
    let due = reminders::due_reminders(&state.db, now, REMINDER_BATCH_SIZE).await?;

    if due.is_empty() {
        match kv::sweep_ephemeral(&state.db, now - EPHEMERAL_STATE_TTL_MS).await {
            Ok(0) => {}
            Ok(n) => tracing::debug!(target: "scheduler", swept = n, "ephemeral state swept"),
            Err(e) => tracing::warn!(target: "scheduler", error = %e, "state sweep failed"),
        }
        let next_due = reminders::next_due_after(&state.db, now).await?;
        return Ok(CycleOutcome::NoneDue { next_due });
    }

    let mut failures = 0_usize;
    for reminder in &due {
        match deliver(http, cache, state, reminder).await {
            Ok(()) => {
                reminders::delete(&state.db, &reminder.reminder_type, reminder.user_id).await?;
            }
            Err(e) => {
                tracing::warn!(
                    target: "scheduler",
                    kind = %reminder.reminder_type,
                    user = reminder.user_id,
                    error = %e,
                    "delivery failed, retrying later"
                );
                failures += 1;
                reminders::push_due(
                    &state.db,
                    &reminder.reminder_type,
                    reminder.user_id,
                    now + DELIVERY_RETRY_PUSH_MS,
                )
                .await?;
            }
        }
    }

    Ok(if failures == 0 {
        CycleOutcome::Delivered
    } else {
        CycleOutcome::PartialFailure
    })
}

/// Deliver one reminder. The snooze payload is persisted first so the button
/// can resurrect the reminder after the row is deleted.
async fn deliver(
    http: &Http,
    cache: &Cache,
    state: &AppState,
    reminder: &Reminder,
) -> Result<(), BotError> {
    let user_id = UserId::new(reminder.user_id as u64);
    let token = panel::create_token(user_id);
    let payload = SnoozePayload {
        reminder_type: reminder.reminder_type.clone(),
        user_id: reminder.user_id,
        guild_id: reminder.guild_id,
        channel_id: reminder.channel_id,
        information: reminder.information.clone(),
        deliver_as_dm: reminder.deliver_as_dm,
    };
    kv::put(
        &state.db,
        &token,
        SNOOZE_STATE_TYPE,
        &serde_json::to_string(&payload)?,
        false,
    )
    .await?;

    let info: ReminderInfo = serde_json::from_str(&reminder.information).unwrap_or_default();
    let message = build_notification(reminder, &info, &token);

    if reminder.deliver_as_dm {
        // Clone out of the cache guard before awaiting anything.
        let cached = cache.user(user_id).map(|u| u.clone());
        let user = match cached {
            Some(user) => user,
            None => http.get_user(user_id).await?,
        };
        user.dm(http, message).await.map_err(|e| {
            if dms_closed(&e) {
                tracing::info!(target: "scheduler", user = reminder.user_id, "user has DMs closed");
            }
            BotError::from(e)
        })?;
    } else {
        ChannelId::new(reminder.channel_id as u64)
            .send_message(http, message)
            .await?;
    }
    Ok(())
}

fn build_notification(reminder: &Reminder, info: &ReminderInfo, token: &str) -> CreateMessage {
    let mut content = format!(
        "{EMOJI_BELL} <@{}> **{}** is ready!",
        reminder.user_id as u64, reminder.reminder_type
    );
    if !info.command.is_empty() {
        content.push_str(&format!("\nRun `{}`", info.command));
    }
    if !info.information.is_empty() {
        content.push_str(&format!("\n{}", info.information));
    }
    // Both buttons carry the owner id so ownership survives even a swept
    // payload; the handler re-checks it on every press.
    let owner = reminder.user_id.to_string();
    CreateMessage::new()
        .content(content)
        .components(vec![CreateActionRow::Buttons(vec![
            Btn::secondary(
                &CustomId::with_extra(ids::ROUTE_REMINDER, ids::ACTION_SNOOZE, token, &owner)
                    .encode(),
                "Snooze 5 min",
            ),
            Btn::danger(
                &CustomId::with_extra(ids::ROUTE_REMINDER, ids::ACTION_DISMISS, token, &owner)
                    .encode(),
                "Dismiss",
            ),
        ])])
}

/// Discord error 50007: cannot send messages to this user.
fn dms_closed(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(resp))
            if resp.error.code == 50007
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_delay_after_clean_cycle() {
        assert_eq!(
            next_delay(&CycleOutcome::Delivered, 0),
            Duration::from_millis(POLL_DELAY_DRAIN_MS)
        );
    }

    #[test]
    fn retry_delay_after_failures() {
        assert_eq!(
            next_delay(&CycleOutcome::PartialFailure, 0),
            Duration::from_millis(POLL_DELAY_RETRY_MS)
        );
    }

    #[test]
    fn idle_delay_without_any_reminders() {
        assert_eq!(
            next_delay(&CycleOutcome::NoneDue { next_due: None }, 0),
            Duration::from_millis(POLL_DELAY_IDLE_MS)
        );
    }

    #[test]
    fn next_due_delay_is_clamped_both_ways() {
        let now = 1_000_000;
        // A due time 1ms out clamps up to the floor.
        let near = next_delay(&CycleOutcome::NoneDue { next_due: Some(now + 1) }, now);
        assert_eq!(near, Duration::from_millis(POLL_DELAY_MIN_MS));
        // A due time hours out clamps down to the ceiling.
        let far = next_delay(
            &CycleOutcome::NoneDue { next_due: Some(now + 10 * 60 * 60 * 1_000) },
            now,
        );
        assert_eq!(far, Duration::from_millis(POLL_DELAY_MAX_MS));
        // In between passes through untouched.
        let mid = next_delay(&CycleOutcome::NoneDue { next_due: Some(now + 30_000) }, now);
        assert_eq!(mid, Duration::from_millis(30_000));
    }

    #[test]
    fn overdue_next_due_still_respects_the_floor() {
        let delay = next_delay(&CycleOutcome::NoneDue { next_due: Some(500) }, 1_000);
        assert_eq!(delay, Duration::from_millis(POLL_DELAY_MIN_MS));
    }
}
