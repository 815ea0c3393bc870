//! # decrypto
//!
//! Round adjudication and end-condition engine for Decrypto, the two-team
//! codebreaking game.
//!
//! ## Design Principles
//!
//! 1. **Closed Rule Set**: End conditions are a fixed enum (`EndRule`), so
//!    composition is an exhaustive match, never an open plugin list.
//!
//! 2. **Copy-on-Read State**: `Game::data()` returns a copy. Callers can
//!    simulate hypothetical rounds against it without touching the real
//!    counters.
//!
//! 3. **Configuration Over Convention**: Thresholds, scoring rules and the
//!    tiebreaker all come from `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Teams, notes, game data, RNG
//! - `rules`: End conditions, scoring rules, tiebreakers
//! - `game`: The adjudicator and its configuration
//! - `play`: Teams' decision roles, code generators, round loop
//!
//! ## Example
//!
//! ```
//! use decrypto::{Game, Note, TeamMap, TeamName};
//!
//! let mut game = Game::default();
//! let note = |decipher: [u8; 3]| {
//!     Note::new()
//!         .with_clues(["sun", "sea", "sky"])
//!         .with_attempted_interception([3, 2, 1])
//!         .with_attempted_decipher(decipher)
//!         .with_correct_code([0, 1, 2])
//! };
//!
//! game.record_round(TeamMap::from_pair(note([0, 2, 1]), note([0, 1, 2]))).unwrap();
//! game.record_round(TeamMap::from_pair(note([2, 1, 0]), note([0, 1, 2]))).unwrap();
//!
//! assert!(game.game_over());
//! assert_eq!(game.winner(), Some(TeamName::Second));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod game;
pub mod play;

// Re-export commonly used types
pub use crate::core::{Clues, Code, GameData, GameRng, GameRngState, Note, NoteField, TeamMap, TeamName};

pub use crate::error::{Error, Result};

pub use crate::rules::{
    EndCondition, EndRule, InterceptionEnd, MiscommunicationEnd, RoundEnd,
    interception_miscommunication_diff_tiebreaker,
};

pub use crate::game::{Game, GameConfig, Notesheet};

pub use crate::play::{
    play_game, play_random_game, play_round, PlayConfig, RandomCodes, RandomKeywordCards, Team,
    TeamContext,
};
