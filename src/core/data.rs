//! Cumulative game counters.
//!
//! `GameData` is a small `Copy` value. The `Game` owns the authoritative
//! instance and hands out copies, so callers can build hypothetical futures
//! (e.g. "what if we miscommunicate this round?") without touching the real
//! scoresheet.

use serde::{Deserialize, Serialize};

use super::team::{TeamMap, TeamName};

/// Rounds played and token counts for both teams.
///
/// All counters only ever grow during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameData {
    /// Rounds adjudicated so far.
    pub rounds_played: u32,

    /// Miscommunication tokens held by each team.
    pub miscommunications: TeamMap<u32>,

    /// Interception tokens held by each team.
    ///
    /// Credited to the team that intercepted, not the team intercepted.
    pub interceptions: TeamMap<u32>,
}

impl GameData {
    /// Fresh data: no rounds, no tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with a different round count.
    #[must_use]
    pub fn with_rounds_played(mut self, rounds: u32) -> Self {
        self.rounds_played = rounds;
        self
    }

    /// Copy with different miscommunication counts.
    #[must_use]
    pub fn with_miscommunications(mut self, counts: impl Into<TeamMap<u32>>) -> Self {
        self.miscommunications = counts.into();
        self
    }

    /// Copy with different interception counts.
    #[must_use]
    pub fn with_interceptions(mut self, counts: impl Into<TeamMap<u32>>) -> Self {
        self.interceptions = counts.into();
        self
    }

    /// Interceptions minus miscommunications for a team.
    #[must_use]
    pub fn token_difference(&self, team: TeamName) -> i64 {
        i64::from(self.interceptions[team]) - i64::from(self.miscommunications[team])
    }
}
