//! Playing games: teams, code generation and the round loop.
//!
//! None of this is needed to adjudicate a game. It exists so the engine can
//! be driven end to end by scripted or random teams.

pub mod config;
pub mod generators;
pub mod round;
pub mod team;

pub use config::PlayConfig;
pub use generators::{
    RandomCodes, RandomKeywordCards, DEFAULT_CARD_SIZE, DEFAULT_CODE_LENGTH, DEFAULT_KEYWORDS,
};
pub use round::{play_game, play_random_game, play_round};
pub use team::{
    Encryptor, Guesser, Intercepter, KeywordEncryptor, KeywordGuesser, RandomGuesser, Team,
    TeamContext,
};
