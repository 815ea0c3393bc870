//! Core value types: teams, per-round notes, cumulative data, RNG.
//!
//! Everything here is a plain value with no game rules attached. Rules live
//! in `rules`, the adjudicator in `game`.

pub mod team;
pub mod note;
pub mod data;
pub mod rng;

pub use team::{TeamMap, TeamName};
pub use note::{Clues, Code, Note, NoteField};
pub use data::GameData;
pub use rng::{GameRng, GameRngState};
