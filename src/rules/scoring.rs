//! Scoring rules.
//!
//! Each rule looks at one team's note and returns how many tokens that note
//! earns (0 or 1 under the official rules). Rules are plain function
//! pointers so house variants can be swapped in through `GameConfig`
//! without touching the adjudicator.
//!
//! `data` is always the game data from *before* the round being scored.

use crate::core::{GameData, Note};
use crate::error::Result;

/// Miscommunication tokens earned by a note's own team.
pub type MiscommunicationRule = fn(&Note) -> Result<u32>;

/// Interception tokens earned by the opponent of a note's team.
pub type InterceptionRule = fn(&Note, &GameData) -> Result<u32>;

/// One token when the team failed to decipher its own clues.
pub fn miscommunication(note: &Note) -> Result<u32> {
    let attempt = note.require_decipher()?;
    let correct = note.require_correct_code()?;
    Ok(u32::from(attempt != correct))
}

/// One token to the opponent when it guessed this note's code.
///
/// No interceptions are scored in the opening round: there is no clue
/// history to intercept from yet.
pub fn interception(note: &Note, data: &GameData) -> Result<u32> {
    interception_with(note, data, false)
}

/// House variant of `interception` that also scores the opening round.
pub fn interception_counting_first_round(note: &Note, data: &GameData) -> Result<u32> {
    interception_with(note, data, true)
}

/// Interception scoring with an explicit opening-round switch.
pub fn interception_with(note: &Note, data: &GameData, count_first_round: bool) -> Result<u32> {
    let attempt = note.require_interception()?;
    let correct = note.require_correct_code()?;
    if data.rounds_played == 0 && !count_first_round {
        return Ok(0);
    }
    Ok(u32::from(attempt == correct))
}
