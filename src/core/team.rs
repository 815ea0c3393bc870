//! Team identification and per-team data storage.
//!
//! ## TeamName
//!
//! Decrypto is always played by exactly two teams. `TeamName` is a closed
//! enum so "the other team" is a type-safe lookup rather than an integer
//! inversion.
//!
//! ## TeamMap
//!
//! Fixed per-team storage backed by a two-element array, indexed by
//! `TeamName`. Used for token counters, a round's notes and a round's codes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// One of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamName {
    First,
    Second,
}

impl TeamName {
    /// Number of teams in a game.
    pub const COUNT: usize = 2;

    /// Both teams, in seating order.
    pub const ALL: [TeamName; 2] = [TeamName::First, TeamName::Second];

    /// The opposing team.
    ///
    /// ```
    /// use decrypto::core::TeamName;
    ///
    /// assert_eq!(TeamName::First.opponent(), TeamName::Second);
    /// assert_eq!(TeamName::Second.opponent(), TeamName::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamName::First => TeamName::Second,
            TeamName::Second => TeamName::First,
        }
    }

    /// Get the team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamName::First => 0,
            TeamName::Second => 1,
        }
    }

    /// Iterate over both teams.
    pub fn all() -> impl Iterator<Item = TeamName> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamName::First => write!(f, "First team"),
            TeamName::Second => write!(f, "Second team"),
        }
    }
}

/// Per-team data storage with one entry per team.
///
/// ## Example
///
/// ```
/// use decrypto::core::{TeamMap, TeamName};
///
/// let mut tokens: TeamMap<u32> = TeamMap::default();
/// tokens[TeamName::Second] += 1;
///
/// assert_eq!(tokens[TeamName::First], 0);
/// assert_eq!(tokens[TeamName::Second], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a TeamMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(TeamName) -> T) -> Self {
        Self {
            data: [factory(TeamName::First), factory(TeamName::Second)],
        }
    }

    /// Create a TeamMap from the first and second team's values.
    pub const fn from_pair(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create a TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamName) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamName) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamName, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamName, &T)> {
        TeamName::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (TeamName, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TeamName, &mut T)> {
        TeamName::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in team order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform each team's value.
    pub fn map<U>(self, mut f: impl FnMut(TeamName, T) -> U) -> TeamMap<U> {
        let [first, second] = self.data;
        TeamMap::from_pair(f(TeamName::First, first), f(TeamName::Second, second))
    }

    /// Pair up two TeamMaps entry by entry.
    pub fn zip<U>(self, other: TeamMap<U>) -> TeamMap<(T, U)> {
        let [a0, a1] = self.data;
        let [b0, b1] = other.data;
        TeamMap::from_pair((a0, b0), (a1, b1))
    }

    /// Teams whose value satisfies the predicate.
    pub fn teams_where(&self, mut pred: impl FnMut(&T) -> bool) -> SmallVec<[TeamName; 2]> {
        self.iter()
            .filter_map(|(team, value)| pred(value).then_some(team))
            .collect()
    }
}

impl<T> Index<TeamName> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamName) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamName> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamName) -> &mut Self::Output {
        self.get_mut(team)
    }
}

impl<T> From<[T; 2]> for TeamMap<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> TryFrom<Vec<T>> for TeamMap<T> {
    type Error = Error;

    /// Accept exactly one value per team.
    fn try_from(values: Vec<T>) -> Result<Self> {
        let found = values.len();
        let data: [T; 2] = values.try_into().map_err(|_| Error::WrongNoteCount {
            expected: TeamName::COUNT,
            found,
        })?;
        Ok(Self { data })
    }
}
