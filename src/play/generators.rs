//! Code and keyword-card generators.
//!
//! Both are infinite iterators driven by a `GameRng`, so a seed fully
//! determines every deal.

use crate::core::{Code, GameRng, GameRngState, TeamMap};
use crate::error::{Error, Result};

/// Digits in an official code.
pub const DEFAULT_CODE_LENGTH: usize = 3;

/// Keywords on an official card.
pub const DEFAULT_CARD_SIZE: usize = 4;

/// Highest keyword count a code digit can index.
const MAX_CARD_SIZE: usize = u8::MAX as usize + 1;

/// Built-in word list for `RandomKeywordCards::with_default_words`.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "antiquity", "black", "bone", "cocktail", "dragonfly", "morning", "nightmare", "sombrero",
    "anchor", "bridge", "candle", "desert", "eclipse", "feather", "glacier", "harbor",
    "island", "jungle", "kettle", "lantern", "mirror", "needle", "orchid", "pirate",
    "quarry", "rocket", "saddle", "thunder", "umbrella", "violin", "whistle", "yacht",
    "zipper", "anvil", "bishop", "canyon", "dungeon", "engine", "falcon", "goblet",
];

/// Random codes for both teams, one pair per round.
///
/// Each code is `code_length` distinct indices into the team's keyword card,
/// every ordering equally likely.
#[derive(Clone, Debug)]
pub struct RandomCodes {
    rng: GameRng,
    card_sizes: TeamMap<usize>,
    code_length: usize,
}

impl RandomCodes {
    /// Create a generator for cards of the given sizes.
    pub fn new(card_sizes: TeamMap<usize>, code_length: usize, rng: GameRng) -> Result<Self> {
        for &keywords in card_sizes.values() {
            if keywords > MAX_CARD_SIZE {
                return Err(Error::CardTooLarge { keywords, max: MAX_CARD_SIZE });
            }
            if code_length > keywords {
                return Err(Error::InvalidCodeLength { length: code_length, keywords });
            }
        }
        Ok(Self { rng, card_sizes, code_length })
    }

    /// Official settings: 3-digit codes on 4-keyword cards.
    pub fn official(rng: GameRng) -> Self {
        Self {
            rng,
            card_sizes: TeamMap::with_value(DEFAULT_CARD_SIZE),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Checkpoint of the code stream.
    ///
    /// A generator rebuilt from it with `GameRng::from_state` and the same
    /// card sizes deals the same codes this one would deal next.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Iterator for RandomCodes {
    type Item = TeamMap<Code>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = self.code_length;
        let rng = &mut self.rng;
        Some(
            self.card_sizes
                .map(|_, size| Code::from_vec(rng.distinct_indices(size, length))),
        )
    }
}

/// Random keyword cards, with no word shared between the two teams.
#[derive(Clone, Debug)]
pub struct RandomKeywordCards {
    rng: GameRng,
    words: Vec<String>,
    card_size: usize,
}

impl RandomKeywordCards {
    /// Deal cards of `card_size` words from `words`.
    ///
    /// Duplicate words are dropped before dealing.
    pub fn new<S: Into<String>>(
        words: impl IntoIterator<Item = S>,
        card_size: usize,
        rng: GameRng,
    ) -> Result<Self> {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();

        let needed = card_size * 2;
        if words.len() < needed {
            return Err(Error::NotEnoughKeywords { needed, available: words.len() });
        }
        Ok(Self { rng, words, card_size })
    }

    /// Deal official 4-word cards from the built-in word list.
    pub fn with_default_words(rng: GameRng) -> Self {
        let mut words: Vec<String> = DEFAULT_KEYWORDS.iter().map(|w| w.to_string()).collect();
        words.sort_unstable();
        words.dedup();
        Self { rng, words, card_size: DEFAULT_CARD_SIZE }
    }
}

impl Iterator for RandomKeywordCards {
    type Item = TeamMap<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rng.shuffle(&mut self.words);
        let (first, rest) = self.words.split_at(self.card_size);
        let second = &rest[..self.card_size];
        Some(TeamMap::from_pair(first.to_vec(), second.to_vec()))
    }
}
