//! End conditions.
//!
//! An end condition looks at a `GameData` snapshot and reports whether the
//! game is over and, if so, who won or who lost. Conditions are independent:
//! the game ends as soon as any one of them fires. Each condition attributes
//! the outcome through exactly one channel (`winner` or `loser`) so that the
//! adjudicator can combine them without double counting.
//!
//! The official rule set is closed, so the configured conditions are stored
//! as the `EndRule` enum rather than trait objects.

use serde::{Deserialize, Serialize};

use crate::core::{GameData, TeamMap, TeamName};

/// Miscommunication tokens that end an official game.
pub const MAX_OFFICIAL_MISCOMMUNICATIONS: u32 = 2;

/// Interception tokens that end an official game.
pub const MAX_OFFICIAL_INTERCEPTIONS: u32 = 2;

/// Rounds after which an official game ends.
pub const MAX_OFFICIAL_ROUNDS: u32 = 8;

/// Miscommunication and interception threshold used by the house rules.
pub const HOUSE_TOKEN_LIMIT: u32 = 3;

/// A condition under which a game may end.
pub trait EndCondition {
    /// Whether this condition ends the game for `data`.
    fn game_over(&self, data: &GameData) -> bool;

    /// The team this condition declares the winner, if any.
    fn winner(&self, data: &GameData) -> Option<TeamName>;

    /// The team this condition declares the loser, if any.
    fn loser(&self, data: &GameData) -> Option<TeamName>;
}

/// The single team whose counter sits exactly at `k`.
///
/// `None` when neither or both teams are at `k`.
fn sole_team_at(counts: &TeamMap<u32>, k: u32) -> Option<TeamName> {
    match counts.teams_where(|&c| c == k).as_slice() {
        [team] => Some(*team),
        _ => None,
    }
}

/// Ends the game when a team holds `k` miscommunication tokens; that team loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MiscommunicationEnd {
    pub k: u32,
}

impl MiscommunicationEnd {
    #[must_use]
    pub const fn new(k: u32) -> Self {
        Self { k }
    }
}

impl Default for MiscommunicationEnd {
    fn default() -> Self {
        Self::new(MAX_OFFICIAL_MISCOMMUNICATIONS)
    }
}

impl EndCondition for MiscommunicationEnd {
    fn game_over(&self, data: &GameData) -> bool {
        data.miscommunications.values().any(|&c| c == self.k)
    }

    fn winner(&self, _data: &GameData) -> Option<TeamName> {
        None
    }

    fn loser(&self, data: &GameData) -> Option<TeamName> {
        // both teams at k is undecided here; the tiebreaker settles it
        sole_team_at(&data.miscommunications, self.k)
    }
}

/// Ends the game when a team holds `k` interception tokens; that team wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterceptionEnd {
    pub k: u32,
}

impl InterceptionEnd {
    #[must_use]
    pub const fn new(k: u32) -> Self {
        Self { k }
    }
}

impl Default for InterceptionEnd {
    fn default() -> Self {
        Self::new(MAX_OFFICIAL_INTERCEPTIONS)
    }
}

impl EndCondition for InterceptionEnd {
    fn game_over(&self, data: &GameData) -> bool {
        data.interceptions.values().any(|&c| c == self.k)
    }

    fn winner(&self, data: &GameData) -> Option<TeamName> {
        sole_team_at(&data.interceptions, self.k)
    }

    fn loser(&self, _data: &GameData) -> Option<TeamName> {
        None
    }
}

/// Ends the game after `k` rounds without deciding a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundEnd {
    pub k: u32,
}

impl RoundEnd {
    #[must_use]
    pub const fn new(k: u32) -> Self {
        Self { k }
    }
}

impl Default for RoundEnd {
    fn default() -> Self {
        Self::new(MAX_OFFICIAL_ROUNDS)
    }
}

impl EndCondition for RoundEnd {
    fn game_over(&self, data: &GameData) -> bool {
        data.rounds_played == self.k
    }

    fn winner(&self, _data: &GameData) -> Option<TeamName> {
        None
    }

    fn loser(&self, _data: &GameData) -> Option<TeamName> {
        None
    }
}

/// The closed set of end conditions a game can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndRule {
    Miscommunication(MiscommunicationEnd),
    Interception(InterceptionEnd),
    Round(RoundEnd),
}

impl EndRule {
    /// Lose at `k` miscommunication tokens.
    #[must_use]
    pub const fn miscommunications(k: u32) -> Self {
        Self::Miscommunication(MiscommunicationEnd::new(k))
    }

    /// Win at `k` interception tokens.
    #[must_use]
    pub const fn interceptions(k: u32) -> Self {
        Self::Interception(InterceptionEnd::new(k))
    }

    /// Stop after `k` rounds.
    #[must_use]
    pub const fn rounds(k: u32) -> Self {
        Self::Round(RoundEnd::new(k))
    }

    /// The official rule set: 8 rounds, 2 miscommunications, 2 interceptions.
    ///
    /// Returns a fresh vector on every call.
    #[must_use]
    pub fn official() -> Vec<EndRule> {
        vec![
            Self::rounds(MAX_OFFICIAL_ROUNDS),
            Self::miscommunications(MAX_OFFICIAL_MISCOMMUNICATIONS),
            Self::interceptions(MAX_OFFICIAL_INTERCEPTIONS),
        ]
    }

    /// House rules: tokens run to 3 instead of 2.
    #[must_use]
    pub fn house() -> Vec<EndRule> {
        vec![
            Self::rounds(MAX_OFFICIAL_ROUNDS),
            Self::miscommunications(HOUSE_TOKEN_LIMIT),
            Self::interceptions(HOUSE_TOKEN_LIMIT),
        ]
    }
}

impl EndCondition for EndRule {
    fn game_over(&self, data: &GameData) -> bool {
        match self {
            EndRule::Miscommunication(c) => c.game_over(data),
            EndRule::Interception(c) => c.game_over(data),
            EndRule::Round(c) => c.game_over(data),
        }
    }

    fn winner(&self, data: &GameData) -> Option<TeamName> {
        match self {
            EndRule::Miscommunication(c) => c.winner(data),
            EndRule::Interception(c) => c.winner(data),
            EndRule::Round(c) => c.winner(data),
        }
    }

    fn loser(&self, data: &GameData) -> Option<TeamName> {
        match self {
            EndRule::Miscommunication(c) => c.loser(data),
            EndRule::Interception(c) => c.loser(data),
            EndRule::Round(c) => c.loser(data),
        }
    }
}

impl From<MiscommunicationEnd> for EndRule {
    fn from(c: MiscommunicationEnd) -> Self {
        Self::Miscommunication(c)
    }
}

impl From<InterceptionEnd> for EndRule {
    fn from(c: InterceptionEnd) -> Self {
        Self::Interception(c)
    }
}

impl From<RoundEnd> for EndRule {
    fn from(c: RoundEnd) -> Self {
        Self::Round(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn misc(counts: [u32; 2]) -> GameData {
        GameData::new().with_miscommunications(counts)
    }

    fn inter(counts: [u32; 2]) -> GameData {
        GameData::new().with_interceptions(counts)
    }

    #[test]
    fn test_round_end() {
        let cond = RoundEnd::default();

        assert!(!cond.game_over(&GameData::new().with_rounds_played(7)));
        assert!(cond.game_over(&GameData::new().with_rounds_played(8)));
        assert_eq!(cond.winner(&GameData::new().with_rounds_played(8)), None);
        assert_eq!(cond.loser(&GameData::new().with_rounds_played(8)), None);
    }

    #[test]
    fn test_miscommunication_end() {
        let cond = MiscommunicationEnd::default();

        assert!(!cond.game_over(&misc([1, 1])));
        assert_eq!(cond.loser(&misc([1, 1])), None);

        assert!(cond.game_over(&misc([1, 2])));
        assert_eq!(cond.loser(&misc([1, 2])), Some(TeamName::Second));
        assert_eq!(cond.winner(&misc([1, 2])), None);

        assert_eq!(cond.loser(&misc([2, 0])), Some(TeamName::First));
    }

    #[test]
    fn test_miscommunication_end_both_teams() {
        let cond = MiscommunicationEnd::default();

        assert!(cond.game_over(&misc([2, 2])));
        assert_eq!(cond.loser(&misc([2, 2])), None);
    }

    #[test]
    fn test_interception_end() {
        let cond = InterceptionEnd::default();

        assert!(!cond.game_over(&inter([1, 0])));
        assert_eq!(cond.winner(&inter([1, 0])), None);

        assert!(cond.game_over(&inter([1, 2])));
        assert_eq!(cond.winner(&inter([1, 2])), Some(TeamName::Second));
        assert_eq!(cond.loser(&inter([1, 2])), None);

        assert!(cond.game_over(&inter([2, 2])));
        assert_eq!(cond.winner(&inter([2, 2])), None);
    }

    #[test]
    fn test_thresholds_are_exact() {
        // counters past k no longer match
        let cond = InterceptionEnd::new(2);
        assert!(!cond.game_over(&inter([3, 0])));

        let cond = MiscommunicationEnd::new(3);
        assert!(!cond.game_over(&misc([2, 2])));
        assert!(cond.game_over(&misc([3, 2])));
    }

    #[test]
    fn test_end_rule_dispatch() {
        let data = misc([0, 2]);
        let rule = EndRule::miscommunications(2);
        assert!(rule.game_over(&data));
        assert_eq!(rule.loser(&data), Some(TeamName::Second));

        let data = inter([2, 0]);
        let rule: EndRule = InterceptionEnd::default().into();
        assert_eq!(rule.winner(&data), Some(TeamName::First));

        let rule: EndRule = RoundEnd::new(3).into();
        assert!(rule.game_over(&GameData::new().with_rounds_played(3)));
    }

    #[test]
    fn test_presets() {
        let official = EndRule::official();
        assert_eq!(official.len(), 3);
        assert!(official.contains(&EndRule::rounds(8)));
        assert!(official.contains(&EndRule::miscommunications(2)));
        assert!(official.contains(&EndRule::interceptions(2)));

        let house = EndRule::house();
        assert!(house.contains(&EndRule::miscommunications(3)));
        assert!(house.contains(&EndRule::interceptions(3)));
    }

    #[test]
    fn test_end_rule_serialization() {
        let rules = EndRule::official();
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: Vec<EndRule> = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
