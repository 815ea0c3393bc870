//! Game rules: end conditions, scoring and tiebreaking.
//!
//! - `end`: conditions that stop the game and attribute the result
//! - `scoring`: per-note token rules
//! - `tiebreak`: fallback winner selection
//!
//! The adjudicator (`crate::game::Game`) calls into these but never hardcodes
//! a threshold or a scoring rule itself.

pub mod end;
pub mod scoring;
pub mod tiebreak;

pub use end::{
    EndCondition, EndRule, InterceptionEnd, MiscommunicationEnd, RoundEnd,
    HOUSE_TOKEN_LIMIT, MAX_OFFICIAL_INTERCEPTIONS, MAX_OFFICIAL_MISCOMMUNICATIONS,
    MAX_OFFICIAL_ROUNDS,
};
pub use scoring::{
    interception, interception_counting_first_round, interception_with, miscommunication,
    InterceptionRule, MiscommunicationRule,
};
pub use tiebreak::{interception_miscommunication_diff_tiebreaker, no_tiebreaker, Tiebreaker};
