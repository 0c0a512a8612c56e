// Declares the slash-command modules. Wiring into the dispatch tables
// happens in `interactions::router::Router::new`.

pub mod level;
pub mod multiplier;
pub mod nuke;
pub mod ping;
pub mod reminders;
pub mod stats;
pub mod wishlist;
