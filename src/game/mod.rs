//! The adjudicator and its configuration.
//!
//! `Game` is the only stateful type in the engine. It never interprets a
//! threshold or scoring rule directly; those come from `GameConfig`.

pub mod adjudicator;
pub mod config;

pub use adjudicator::{Game, Notesheet};
pub use config::GameConfig;
