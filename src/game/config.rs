//! Game configuration.
//!
//! A `GameConfig` bundles every replaceable rule the adjudicator uses:
//! - end conditions (closed `EndRule` set, any number of them)
//! - the miscommunication and interception scoring rules
//! - the tiebreaker
//!
//! Each config owns its own end-condition list; presets build a fresh one.

use crate::rules::{
    interception, interception_miscommunication_diff_tiebreaker, miscommunication, EndRule,
    InterceptionRule, MiscommunicationRule, Tiebreaker,
};

/// Rules a `Game` is adjudicated with.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Conditions that end the game. Any one firing ends it.
    pub end_conditions: Vec<EndRule>,

    /// Miscommunication tokens earned per note.
    pub miscommunication: MiscommunicationRule,

    /// Interception tokens earned per note (credited to the opponent).
    pub interception: InterceptionRule,

    /// Winner selection when the end conditions don't agree on one team.
    pub tiebreaker: Tiebreaker,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::official()
    }
}

impl GameConfig {
    /// Official Decrypto rules.
    #[must_use]
    pub fn official() -> Self {
        Self {
            end_conditions: EndRule::official(),
            miscommunication,
            interception,
            tiebreaker: interception_miscommunication_diff_tiebreaker,
        }
    }

    /// Official scoring with three-token limits.
    #[must_use]
    pub fn home_rules() -> Self {
        Self::official().with_end_conditions(EndRule::house())
    }

    /// Add an end condition.
    #[must_use]
    pub fn with_end_condition(mut self, condition: impl Into<EndRule>) -> Self {
        self.end_conditions.push(condition.into());
        self
    }

    /// Replace all end conditions.
    #[must_use]
    pub fn with_end_conditions(mut self, conditions: impl IntoIterator<Item = EndRule>) -> Self {
        self.end_conditions = conditions.into_iter().collect();
        self
    }

    /// Replace the miscommunication rule.
    #[must_use]
    pub fn with_miscommunication_rule(mut self, rule: MiscommunicationRule) -> Self {
        self.miscommunication = rule;
        self
    }

    /// Replace the interception rule.
    #[must_use]
    pub fn with_interception_rule(mut self, rule: InterceptionRule) -> Self {
        self.interception = rule;
        self
    }

    /// Replace the tiebreaker.
    #[must_use]
    pub fn with_tiebreaker(mut self, tiebreaker: Tiebreaker) -> Self {
        self.tiebreaker = tiebreaker;
        self
    }
}
