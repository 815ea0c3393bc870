//! Teams and their decision-making roles.
//!
//! A team has a keyword card and three roles:
//! - `Encryptor`: turns this round's code into clues
//! - `Intercepter`: guesses the opponent's code from the opponent's clues;
//!   the guess is recorded on the opponent's note
//! - `Guesser`: deciphers the team's own clues
//!
//! Roles are trait objects so humans, scripts and AIs can be mixed freely.
//! Each decision gets a `TeamContext` with what that team is allowed to see.

use crate::core::{Clues, Code, GameRng, TeamName};
use crate::game::Game;

/// What a team may look at when making a decision.
///
/// In the notesheet, a team's own note holds the opponent's interception
/// attempts on its code; its own interception attempts are on the
/// opponent's note.
#[derive(Clone, Copy)]
pub struct TeamContext<'a> {
    /// The deciding team.
    pub team: TeamName,

    /// The deciding team's own keyword card.
    pub keywords: &'a [String],

    /// How many keywords the opponent holds (their words stay hidden).
    pub opponent_keyword_count: usize,

    /// Game state: counters and the notesheet of earlier rounds.
    pub game: &'a Game,
}

impl<'a> TeamContext<'a> {
    /// Create a new context.
    pub fn new(
        team: TeamName,
        keywords: &'a [String],
        opponent_keyword_count: usize,
        game: &'a Game,
    ) -> Self {
        Self {
            team,
            keywords,
            opponent_keyword_count,
            game,
        }
    }
}

/// Decides the clues for the team's code.
pub trait Encryptor {
    /// One clue per code digit.
    fn decide_clues(&mut self, code: &Code, context: &TeamContext<'_>) -> Clues;
}

/// Attempts to intercept the opposing team's code.
///
/// The guess is written to the opponent's note as its
/// `attempted_interception`, next to the code it is checked against.
pub trait Intercepter {
    /// A guess at the opponent's code, one digit per clue.
    fn intercept_clues(&mut self, opponent_clues: &Clues, context: &TeamContext<'_>) -> Code;
}

/// Attempts to decipher the team's own clues.
pub trait Guesser {
    /// A guess at the team's own code, one digit per clue.
    fn decipher_clues(&mut self, clues: &Clues, context: &TeamContext<'_>) -> Code;
}

/// A team taking part in a game.
pub struct Team {
    /// The team's keyword card; code digits index into it.
    pub keywords: Vec<String>,
    pub encryptor: Box<dyn Encryptor>,
    pub intercepter: Box<dyn Intercepter>,
    pub guesser: Box<dyn Guesser>,
}

impl Team {
    /// Create a new team.
    pub fn new<S: Into<String>>(
        keywords: impl IntoIterator<Item = S>,
        encryptor: impl Encryptor + 'static,
        intercepter: impl Intercepter + 'static,
        guesser: impl Guesser + 'static,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            encryptor: Box::new(encryptor),
            intercepter: Box::new(intercepter),
            guesser: Box::new(guesser),
        }
    }

    /// A sandbox team: keywords as clues, perfect deciphering, random
    /// interception.
    pub fn sandbox<S: Into<String>>(keywords: impl IntoIterator<Item = S>, seed: u64) -> Self {
        Self::new(keywords, KeywordEncryptor, RandomGuesser::new(seed), KeywordGuesser)
    }
}

// =============================================================================
// Built-in roles
// =============================================================================

/// Uses the keyword itself as the clue.
///
/// Trivial to decipher and trivial to intercept once a keyword has been
/// seen; useful for testing. Digits past the end of the card have no keyword
/// and give no clue, so the clue list comes out shorter than the code.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordEncryptor;

impl Encryptor for KeywordEncryptor {
    fn decide_clues(&mut self, code: &Code, context: &TeamContext<'_>) -> Clues {
        code.iter()
            .filter_map(|&digit| context.keywords.get(usize::from(digit)).cloned())
            .collect()
    }
}

/// Deciphers clues that are the team's own keywords.
///
/// Guesses one digit per clue. A clue that is not on the card, or sits past
/// the 256 positions a digit can name, is read as digit 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordGuesser;

impl Guesser for KeywordGuesser {
    fn decipher_clues(&mut self, clues: &Clues, context: &TeamContext<'_>) -> Code {
        clues
            .iter()
            .map(|clue| {
                context
                    .keywords
                    .iter()
                    .position(|keyword| keyword == clue)
                    .and_then(|i| u8::try_from(i).ok())
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Guesses a uniformly random code with distinct digits.
#[derive(Clone, Debug)]
pub struct RandomGuesser {
    rng: GameRng,
}

impl RandomGuesser {
    /// Create a random guesser with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    fn guess(&mut self, keyword_count: usize, length: usize) -> Code {
        let range = keyword_count.min(usize::from(u8::MAX) + 1);
        Code::from_vec(self.rng.distinct_indices(range, length.min(range)))
    }
}

impl Intercepter for RandomGuesser {
    fn intercept_clues(&mut self, opponent_clues: &Clues, context: &TeamContext<'_>) -> Code {
        self.guess(context.opponent_keyword_count, opponent_clues.len())
    }
}

impl Guesser for RandomGuesser {
    fn decipher_clues(&mut self, clues: &Clues, context: &TeamContext<'_>) -> Code {
        self.guess(context.keywords.len(), clues.len())
    }
}
