//! Tiebreakers.
//!
//! Called when the end conditions name no winner (the round limit was
//! reached) or more than one (both teams crossed a threshold together).

use crate::core::{GameData, TeamName};

/// Picks a winner from game data, or `None` for a true tie.
pub type Tiebreaker = fn(&GameData) -> Option<TeamName>;

/// Official tiebreak: interceptions minus miscommunications, highest wins.
pub fn interception_miscommunication_diff_tiebreaker(data: &GameData) -> Option<TeamName> {
    let first = data.token_difference(TeamName::First);
    let second = data.token_difference(TeamName::Second);
    match first.cmp(&second) {
        std::cmp::Ordering::Greater => Some(TeamName::First),
        std::cmp::Ordering::Less => Some(TeamName::Second),
        std::cmp::Ordering::Equal => None,
    }
}

/// Never breaks a tie.
pub fn no_tiebreaker(_data: &GameData) -> Option<TeamName> {
    None
}
