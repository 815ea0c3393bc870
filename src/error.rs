//! Crate error type.
//!
//! Every error here is a precondition violation: the caller handed the
//! engine data it cannot score. Ambiguous game outcomes are not errors and
//! are modelled as `None` winners instead.

use crate::core::{NoteField, TeamName};

/// Errors returned by the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scoring rule needed a note field that was never filled in.
    #[error("note is missing `{field}`")]
    MissingField { field: NoteField },

    /// A team's note for the round was not fully populated.
    #[error("{team}'s note is missing `{field}`")]
    IncompleteNote { team: TeamName, field: NoteField },

    /// A round must carry exactly one note per team.
    #[error("expected {expected} notes per round, found {found}")]
    WrongNoteCount { expected: usize, found: usize },

    /// Codes cannot be longer than the keyword card they index into.
    #[error("cannot draw a code of length {length} from {keywords} keywords")]
    InvalidCodeLength { length: usize, keywords: usize },

    /// Code digits are `u8`, so a card cannot hold more keywords than they index.
    #[error("a keyword card of {keywords} words exceeds the {max}-word limit")]
    CardTooLarge { keywords: usize, max: usize },

    /// The word list cannot fill the requested keyword cards.
    #[error("need {needed} distinct keywords, word list has {available}")]
    NotEnoughKeywords { needed: usize, available: usize },
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
