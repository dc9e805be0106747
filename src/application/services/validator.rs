//! Candidate validation service
//!
//! Runs the three word checks in a fixed order and stops at the first failure.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    is_original, is_possible, AcceptedWords, Candidate, GameSession, Rejection, RootWord,
};
use crate::infrastructure::traits::Dictionary;

/// Validates candidates against a root word, the accepted list and a dictionary.
pub struct Validator {
    dictionary: Arc<dyn Dictionary>,
    language: String,
}

impl Validator {
    /// Create a validator that asks `dictionary` about words in `language`.
    pub fn new(dictionary: Arc<dyn Dictionary>, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// Validate a candidate against the session's root word and accepted words.
    pub fn validate(&self, candidate: &Candidate, session: &GameSession) -> Result<(), Rejection> {
        self.check(&session.root, &session.accepted, candidate.as_str())
    }

    /// Check order: originality, feasibility, realness.
    ///
    /// The order decides which rejection a player sees for a word that
    /// breaks several rules.
    pub fn check(
        &self,
        root: &RootWord,
        accepted: &AcceptedWords,
        word: &str,
    ) -> Result<(), Rejection> {
        if !is_original(word, accepted) {
            debug!("check: {word:?} already used");
            return Err(Rejection::AlreadyUsed);
        }
        if !is_possible(word, root) {
            debug!("check: {word:?} not possible from {root}");
            return Err(Rejection::NotPossible);
        }
        if !self.dictionary.is_recognized(word, &self.language) {
            debug!("check: {word:?} not recognized ({})", self.language);
            return Err(Rejection::NotReal);
        }
        Ok(())
    }
}
