//! Per-round notes.
//!
//! Each round, each team's code gets one `Note`: the clues its encryptor
//! gave, the opponent's interception attempt on it, the team's own decipher
//! attempt, and finally the code itself. Everything on a note is about the
//! same code, so a note can be scored on its own. A note is only scored once
//! every field is present.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// A secret code: distinct indices into a team's keyword card.
///
/// Official codes have three digits, so four inline slots cover every
/// variant without allocating.
pub type Code = SmallVec<[u8; 4]>;

/// Hint tokens, one per code digit.
pub type Clues = SmallVec<[String; 4]>;

/// Names of the fields on a `Note`, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteField {
    Clues,
    AttemptedInterception,
    AttemptedDecipher,
    CorrectCode,
}

impl std::fmt::Display for NoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NoteField::Clues => "clues",
            NoteField::AttemptedInterception => "attempted_interception",
            NoteField::AttemptedDecipher => "attempted_decipher",
            NoteField::CorrectCode => "correct_code",
        };
        f.write_str(name)
    }
}

/// One team's record of a single round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Clues given by this team's encryptor for its own code.
    pub clues: Option<Clues>,

    /// The opponent's attempt at this team's code.
    ///
    /// A match with `correct_code` scores an interception for the opponent.
    pub attempted_interception: Option<Code>,

    /// This team's guess at its own code.
    pub attempted_decipher: Option<Code>,

    /// The code this team was dealt.
    pub correct_code: Option<Code>,
}

impl Note {
    /// Create an empty note.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clues.
    #[must_use]
    pub fn with_clues<S: Into<String>>(mut self, clues: impl IntoIterator<Item = S>) -> Self {
        self.clues = Some(clues.into_iter().map(Into::into).collect());
        self
    }

    /// Set the opponent's interception attempt on this note's code.
    #[must_use]
    pub fn with_attempted_interception(mut self, code: impl IntoIterator<Item = u8>) -> Self {
        self.attempted_interception = Some(code.into_iter().collect());
        self
    }

    /// Set the decipher guess.
    #[must_use]
    pub fn with_attempted_decipher(mut self, code: impl IntoIterator<Item = u8>) -> Self {
        self.attempted_decipher = Some(code.into_iter().collect());
        self
    }

    /// Set the revealed code.
    #[must_use]
    pub fn with_correct_code(mut self, code: impl IntoIterator<Item = u8>) -> Self {
        self.correct_code = Some(code.into_iter().collect());
        self
    }

    /// First field that is still empty, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<NoteField> {
        if self.clues.is_none() {
            Some(NoteField::Clues)
        } else if self.attempted_interception.is_none() {
            Some(NoteField::AttemptedInterception)
        } else if self.attempted_decipher.is_none() {
            Some(NoteField::AttemptedDecipher)
        } else if self.correct_code.is_none() {
            Some(NoteField::CorrectCode)
        } else {
            None
        }
    }

    /// Check that every field has been filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// The decipher guess, or an error if it was never made.
    pub fn require_decipher(&self) -> Result<&Code> {
        require(&self.attempted_decipher, NoteField::AttemptedDecipher)
    }

    /// The interception guess, or an error if it was never made.
    pub fn require_interception(&self) -> Result<&Code> {
        require(&self.attempted_interception, NoteField::AttemptedInterception)
    }

    /// The revealed code, or an error if it was never revealed.
    pub fn require_correct_code(&self) -> Result<&Code> {
        require(&self.correct_code, NoteField::CorrectCode)
    }
}

fn require<T>(value: &Option<T>, field: NoteField) -> Result<&T> {
    value.as_ref().ok_or(Error::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_builder() {
        let note = Note::new()
            .with_clues(["a", "b", "c"])
            .with_attempted_decipher([2, 3, 1])
            .with_attempted_interception([1, 3, 2])
            .with_correct_code([4, 3, 1]);

        assert_eq!(note.clues.as_deref(), Some(&["a".to_string(), "b".into(), "c".into()][..]));
        assert_eq!(note.attempted_decipher.as_deref(), Some(&[2, 3, 1][..]));
        assert_eq!(note.attempted_interception.as_deref(), Some(&[1, 3, 2][..]));
        assert_eq!(note.correct_code.as_deref(), Some(&[4, 3, 1][..]));
        assert!(note.is_complete());
    }

    #[test]
    fn test_missing_field_order() {
        let note = Note::new();
        assert_eq!(note.missing_field(), Some(NoteField::Clues));

        let note = note.with_clues(["x"]).with_attempted_interception([0]);
        assert_eq!(note.missing_field(), Some(NoteField::AttemptedDecipher));
        assert!(!note.is_complete());
    }

    #[test]
    fn test_require_fields() {
        let note = Note::new().with_correct_code([0, 1, 2]);

        assert_eq!(note.require_correct_code().unwrap().as_slice(), &[0, 1, 2]);
        assert_eq!(
            note.require_decipher(),
            Err(Error::MissingField { field: NoteField::AttemptedDecipher })
        );
    }

    #[test]
    fn test_note_serialization() {
        let note = Note::new().with_clues(["sun"]).with_correct_code([1]);
        let json = serde_json::to_string(&note).unwrap();
        let deserialized: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, deserialized);
    }
}
