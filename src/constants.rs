// Central constants for scheduling, pagination, and scraper source ids.

/// Max reminder rows fetched per poll cycle.
pub const REMINDER_BATCH_SIZE: i64 = 20;

/// Delay after a cycle in which every due reminder was delivered.
pub const POLL_DELAY_DRAIN_MS: u64 = 1_500;
/// Delay after a cycle in which at least one delivery failed.
pub const POLL_DELAY_RETRY_MS: u64 = 5_000;
/// Bounds for the "sleep until the next future due time" computation.
pub const POLL_DELAY_MIN_MS: u64 = 2_000;
pub const POLL_DELAY_MAX_MS: u64 = 300_000;
/// Delay when no reminders exist at all.
pub const POLL_DELAY_IDLE_MS: u64 = 60_000;

/// How far a failed delivery is pushed into the future.
pub const DELIVERY_RETRY_PUSH_MS: i64 = 60_000;
/// Snooze button re-queues the reminder this far out.
pub const SNOOZE_MINUTES: i64 = 5;

/// Ephemeral KV rows older than this are swept during idle cycles.
pub const EPHEMERAL_STATE_TTL_MS: i64 = 24 * 60 * 60 * 1_000;

/// Custom ids must stay under Discord's 100-char bound; tokens are truncated
/// so `route:action:token:extra` always fits.
pub const TOKEN_MAX_LEN: usize = 40;

/// Rows shown per page on the multiplier and wishlist panels.
pub const PANEL_PAGE_SIZE: usize = 10;

// Source bot user ids the scrapers listen to.
pub const DANK_MEMER_ID: u64 = 270_904_126_974_590_976;
pub const KARUTA_ID: u64 = 646_937_666_251_915_264;
pub const IZZI_ID: u64 = 784_851_074_472_280_076;
pub const ANIGAME_ID: u64 = 571_027_211_407_196_161;
pub const SEVEN_W_SEVEN_ID: u64 = 712_912_762_843_070_475;

/// Cooldowns (minutes) for scraper-created reminders.
pub const KARUTA_VISIT_MINUTES: i64 = 600;
pub const DANK_DAILY_MINUTES: i64 = 24 * 60;
pub const IZZI_RAID_MINUTES: i64 = 120;
pub const ANIGAME_BATTLE_MINUTES: i64 = 30;
