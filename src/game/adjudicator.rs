//! The round adjudicator.
//!
//! `Game` owns the authoritative `GameData`, scores each completed round's
//! notes, and answers "is it over?" and "who won?" for its own data or any
//! hypothetical snapshot.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{GameData, Note, TeamMap, TeamName};
use crate::error::{Error, Result};
use crate::rules::EndCondition;

use super::config::GameConfig;

/// Every recorded round, oldest first.
pub type Notesheet = Vector<TeamMap<Note>>;

/// A Decrypto game between two teams.
///
/// ## Lifecycle
///
/// 1. Create with `Game::new(config)` (or `Game::default()` for official rules)
/// 2. After each round, pass both teams' notes to `record_round`
/// 3. Stop once `game_over()` is true and read `winner()`
///
/// Cloning is cheap: the notesheet is a persistent vector.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    data: GameData,
    notesheet: Notesheet,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::official())
    }
}

impl Game {
    /// Create a new game with fresh data.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            data: GameData::new(),
            notesheet: Vector::new(),
        }
    }

    /// Rebuild a game by replaying recorded rounds.
    ///
    /// Replay stops once the game is over; any rounds after that point are
    /// not scored and not kept.
    pub fn from_notesheet(
        config: GameConfig,
        notesheet: impl IntoIterator<Item = TeamMap<Note>>,
    ) -> Result<Self> {
        let mut game = Self::new(config);
        for round_notes in notesheet {
            if game.game_over() {
                break;
            }
            game.record_round(round_notes)?;
        }
        Ok(game)
    }

    /// The rules this game is adjudicated with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A copy of the current counters.
    #[must_use]
    pub fn data(&self) -> GameData {
        self.data
    }

    /// Recorded rounds.
    #[must_use]
    pub fn notesheet(&self) -> &Notesheet {
        &self.notesheet
    }

    // === Scoring ===

    /// The data that would result from scoring `round_notes` now.
    ///
    /// Does not modify the game. Both notes must be complete.
    pub fn simulate_round(&self, round_notes: &TeamMap<Note>) -> Result<GameData> {
        for (team, note) in round_notes.iter() {
            if let Some(field) = note.missing_field() {
                return Err(Error::IncompleteNote { team, field });
            }
        }

        let before = self.data;
        let mut after = before;
        for (team, note) in round_notes.iter() {
            let misses = (self.config.miscommunication)(note).map_err(|e| for_team(team, e))?;
            let intercepts = (self.config.interception)(note, &before).map_err(|e| for_team(team, e))?;

            // custom rules may award any count; counters stop at u32::MAX
            let misc = &mut after.miscommunications[team];
            *misc = misc.saturating_add(misses);
            let caught = &mut after.interceptions[team.opponent()];
            *caught = caught.saturating_add(intercepts);
        }
        after.rounds_played = after.rounds_played.saturating_add(1);
        Ok(after)
    }

    /// Score a completed round.
    ///
    /// Each team's note adds its miscommunications to that team and its
    /// interceptions to the opposing team. `rounds_played` then advances by
    /// one. On error nothing is changed.
    ///
    /// The game does not refuse rounds after it is over; callers check
    /// `game_over()` first.
    pub fn process_round_notes(&mut self, round_notes: &TeamMap<Note>) -> Result<()> {
        if self.game_over() {
            log::warn!(
                "scoring round {} after the game already ended",
                self.data.rounds_played + 1
            );
        }

        let next = self.simulate_round(round_notes)?;
        log::debug!(
            "round {}: miscommunications {:?} -> {:?}, interceptions {:?} -> {:?}",
            next.rounds_played,
            self.data.miscommunications,
            next.miscommunications,
            self.data.interceptions,
            next.interceptions,
        );
        self.data = next;
        Ok(())
    }

    /// Score a completed round and append it to the notesheet.
    pub fn record_round(&mut self, round_notes: TeamMap<Note>) -> Result<()> {
        self.process_round_notes(&round_notes)?;
        self.notesheet.push_back(round_notes);
        Ok(())
    }

    // === Outcome ===

    /// Whether the game is over.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over_for(&self.data)
    }

    /// Whether any end condition fires for `data`.
    #[must_use]
    pub fn game_over_for(&self, data: &GameData) -> bool {
        self.config.end_conditions.iter().any(|c| c.game_over(data))
    }

    /// The winner of the game, if it is over and decided.
    #[must_use]
    pub fn winner(&self) -> Option<TeamName> {
        self.winner_for(&self.data)
    }

    /// The winner for `data`.
    ///
    /// `None` while the game is not over. Otherwise the end conditions vote:
    /// a declared winner counts for itself, a declared loser counts for its
    /// opponent. A single candidate wins outright; no candidates or two
    /// candidates go to the tiebreaker, which may still return `None`.
    #[must_use]
    pub fn winner_for(&self, data: &GameData) -> Option<TeamName> {
        if !self.game_over_for(data) {
            return None;
        }

        let conditions = &self.config.end_conditions;
        let mut candidates: FxHashSet<TeamName> =
            conditions.iter().filter_map(|c| c.winner(data)).collect();
        candidates.extend(
            conditions
                .iter()
                .filter_map(|c| c.loser(data))
                .map(TeamName::opponent),
        );

        if candidates.len() == 1 {
            return candidates.into_iter().next();
        }
        (self.config.tiebreaker)(data)
    }
}

/// Attach the team to an error raised by a scoring rule.
fn for_team(team: TeamName, err: Error) -> Error {
    match err {
        Error::MissingField { field } => Error::IncompleteNote { team, field },
        other => other,
    }
}
