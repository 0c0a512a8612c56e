//! Component/modal handlers plus the dispatch machinery that routes to them.

pub mod ids;
pub mod level_handler;
pub mod multiplier_handler;
pub mod nuke_handler;
pub mod reminder_handler;
pub mod router;
pub mod util;
pub mod wishlist_handler;
