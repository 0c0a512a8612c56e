//! Token-addressed panel state.
//!
//! Every paginated UI surface follows the same contract: a short opaque token
//! is embedded in each component custom id, the full view-state lives in the
//! KV store under that token, and every callback reloads the state, verifies
//! ownership, mutates, saves, and re-renders from relational data. The token
//! is a handle, not a credential; ownership is re-checked on every access.

use crate::database::init::DbPool;
use crate::database::kv;
use crate::error::BotError;
use crate::util::now_ms;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serenity::model::id::UserId;

/// State blobs that carry their owning user. Lets the shared load path do the
/// ownership check uniformly.
pub trait OwnedState {
    fn owner(&self) -> i64;
}

/// Short unguessable-enough handle: owner-id suffix, millis timestamp in
/// base36, and random alphanumerics, truncated to the custom-id budget.
pub fn create_token(owner: UserId) -> String {
    let id = owner.get().to_string();
    let suffix = &id[id.len().saturating_sub(4)..];
    let stamp = to_base36(now_ms() as u64);
    let noise: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let mut token = format!("{suffix}{stamp}{noise}");
    token.truncate(crate::constants::TOKEN_MAX_LEN);
    token
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Serialize and store a panel's state under its token. Panel state is UI-only
/// and short-lived, so it is written as ephemeral.
pub async fn save_state<S: Serialize>(
    pool: &DbPool,
    kind: &str,
    token: &str,
    state: &S,
) -> Result<(), BotError> {
    let json = serde_json::to_string(state)?;
    kv::put(pool, token, kind, &json, false).await?;
    Ok(())
}

/// Load a panel's state. Missing rows and corrupt JSON both come back as
/// `None`; the caller turns that into a "panel expired" message.
pub async fn load_state<S: DeserializeOwned>(
    pool: &DbPool,
    kind: &str,
    token: &str,
) -> Result<Option<S>, BotError> {
    let Some(json) = kv::get(pool, token, kind).await? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&json).ok())
}

/// Load + ownership check in one step. `PanelExpired` when the token no longer
/// resolves, `NotYourPanel` when someone else's panel is being driven.
pub async fn load_owned<S: DeserializeOwned + OwnedState>(
    pool: &DbPool,
    kind: &str,
    token: &str,
    actor: UserId,
) -> Result<S, BotError> {
    let state: S = load_state(pool, kind, token)
        .await?
        .ok_or(BotError::PanelExpired)?;
    if state.owner() != actor.get() as i64 {
        return Err(BotError::NotYourPanel);
    }
    Ok(state)
}

/// Drop a panel's stored state once the surface is closed.
pub async fn discard_state(pool: &DbPool, kind: &str, token: &str) -> Result<(), BotError> {
    kv::delete(pool, token, kind).await?;
    Ok(())
}

/// Number of pages needed for `total` items at `per_page`.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 { 0 } else { total.div_ceil(per_page) }
}

/// Clamp a page index into `[0, page_count-1]` (0 when the list is empty).
/// Applied after every mutation that can shrink the underlying list.
pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
    let pages = page_count(total, per_page);
    if pages == 0 { 0 } else { page.min(pages - 1) }
}

/// The slice of `items` visible on `page` (already clamped by the caller).
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::id::UserId;

    #[test]
    fn tokens_fit_the_custom_id_budget() {
        let token = create_token(UserId::new(123_456_789_012_345_678));
        assert!(token.len() <= crate::constants::TOKEN_MAX_LEN);
        assert!(!token.contains(':'));
    }

    #[test]
    fn tokens_differ_between_calls() {
        let owner = UserId::new(42);
        assert_ne!(create_token(owner), create_token(owner));
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 0, 10), 0);
        assert_eq!(clamp_page(3, 5, 10), 0);
        assert_eq!(clamp_page(1, 11, 10), 1);
        assert_eq!(clamp_page(5, 11, 10), 1);
        assert_eq!(clamp_page(2, 30, 10), 2);
    }

    #[test]
    fn page_slice_is_stable_at_the_tail() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(page_slice(&items, 2, 10), &[20, 21, 22, 23, 24]);
        assert_eq!(page_slice(&items, 9, 10), &[] as &[i32]);
    }
}
