// Library entry so integration tests and external tools can reference
// internal modules. The binary (`main.rs`) uses the same surface.
#![feature(int_roundings)]

pub mod commands;
pub mod constants;
pub mod database;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod scrapers;
pub mod services;
pub mod ui;
pub mod util;

// Convenient re-exports for frequently used types.
pub use error::BotError;
pub use model::AppState;
