//! Game session controller
//!
//! Owns the session state and is the only place that mutates it.
//! UI code reads the session through accessors and drives it with
//! `start_game`, `submit` and `dismiss_error`.

use std::io;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::application::services::Validator;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{AcceptedWords, Candidate, ErrorState, GameSession, Rejection, RootWord};
use crate::infrastructure::resources::{parse_word_list, StartWordSource};
use crate::infrastructure::traits::FileSystem;

/// Result of submitting raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after normalization; nothing happened
    Ignored,
    /// An alert is still showing; dismiss it first
    AwaitingDismissal,
    /// Word was accepted and is now the newest entry
    Accepted(String),
    /// Word was rejected; the session's error state describes why
    Rejected(Rejection),
}

/// Controller for a single game session.
pub struct SessionController {
    fs: Arc<dyn FileSystem>,
    validator: Validator,
    start_words: StartWordSource,
    fallback: RootWord,
    rng: StdRng,
    session: GameSession,
}

impl SessionController {
    /// Create a controller. The session starts on the fallback word until
    /// `start_game` is called.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        validator: Validator,
        start_words: StartWordSource,
        fallback: RootWord,
    ) -> Self {
        Self {
            fs,
            validator,
            start_words,
            session: GameSession::new(fallback.clone()),
            fallback,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a seeded generator so root word selection is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Pick a new root word and clear the accepted words.
    ///
    /// The start-word list is read in full on every call. An empty list
    /// falls back to the configured fallback word; a list that cannot be
    /// read is an error.
    pub fn start_game(&mut self) -> ApplicationResult<&RootWord> {
        let words = self.load_start_words()?;
        let root = match words.choose(&mut self.rng) {
            Some(word) => word.clone(),
            None => {
                warn!(
                    "start_game: no usable start words in {}, using fallback {}",
                    self.start_words, self.fallback
                );
                self.fallback.clone()
            }
        };
        Ok(self.start_game_with(root))
    }

    /// Start a game on a given root word instead of a random one.
    pub fn start_game_with(&mut self, root: RootWord) -> &RootWord {
        info!("start_game: root word {}", root);
        self.session.reset(root);
        &self.session.root
    }

    fn load_start_words(&self) -> ApplicationResult<Vec<RootWord>> {
        let content = match &self.start_words {
            StartWordSource::Bundled => return Ok(parse_word_list(StartWordSource::BUNDLED)),
            StartWordSource::File(path) => {
                debug!("load_start_words: {}", path.display());
                match self.fs.read_to_string(path) {
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        return Err(ApplicationError::WordListUnavailable(path.clone()));
                    }
                    other => other.with_path_context("read start words", path)?,
                }
            }
        };
        Ok(parse_word_list(&content))
    }

    /// Submit raw player input.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if self.session.error.visible {
            debug!("submit: alert still visible, ignoring {raw:?}");
            return SubmitOutcome::AwaitingDismissal;
        }
        let Some(candidate) = Candidate::normalize(raw) else {
            return SubmitOutcome::Ignored;
        };

        match self.validator.validate(&candidate, &self.session) {
            Ok(()) => {
                let word = candidate.into_inner();
                debug!("submit: accepted {word:?}");
                self.session.accepted.insert_newest(word.clone());
                SubmitOutcome::Accepted(word)
            }
            Err(rejection) => {
                debug!("submit: rejected {candidate} ({})", rejection.code());
                self.session.error.show(rejection);
                SubmitOutcome::Rejected(rejection)
            }
        }
    }

    /// Hide the current alert so the next submission is processed.
    pub fn dismiss_error(&mut self) {
        self.session.error.dismiss();
    }

    pub fn root_word(&self) -> &RootWord {
        &self.session.root
    }

    pub fn accepted_words(&self) -> &AcceptedWords {
        &self.session.accepted
    }

    pub fn error_state(&self) -> &ErrorState {
        &self.session.error
    }
}
