//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// The word all candidate letters are drawn from.
///
/// Stored lowercase. Replaced only when a new game starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Create a root word from raw text (trimmed and lowercased).
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Err(DomainError::EmptyRootWord);
        }
        if word.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidRootWord(word));
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RootWord {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized player submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate(String);

impl Candidate {
    /// Lowercase and trim raw input.
    ///
    /// Returns `None` when nothing is left, which callers treat as a no-op.
    pub fn normalize(raw: &str) -> Option<Self> {
        let word = raw.to_lowercase().trim().to_string();
        if word.is_empty() {
            None
        } else {
            Some(Self(word))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Words accepted in the current game, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptedWords(Vec<String>);

impl AcceptedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a word so it becomes the first element.
    pub fn insert_newest(&mut self, word: String) {
        self.0.insert(0, word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn newest(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Why a candidate was turned down.
///
/// Each kind carries fixed alert copy shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Candidate is already in the accepted list
    AlreadyUsed,
    /// Too short, equal to the root, or not spellable from the root's letters
    NotPossible,
    /// Dictionary oracle does not recognize the candidate
    NotReal,
}

impl Rejection {
    /// Titles read loosely against the kinds: an infeasible word is "not
    /// recognized", an unknown one is "not possible". Players see this copy.
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::AlreadyUsed => "Word used already",
            Rejection::NotPossible => "Word not recognized",
            Rejection::NotReal => "Word not possible",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rejection::AlreadyUsed => "Be more original",
            Rejection::NotPossible => "You can't just make them up, you know!",
            Rejection::NotReal => "That isn't a real word.",
        }
    }

    /// Stable identifier for scripted output.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::AlreadyUsed => "already_used",
            Rejection::NotPossible => "not_possible",
            Rejection::NotReal => "not_real",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Alert content plus visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub title: String,
    pub message: String,
    pub visible: bool,
}

impl ErrorState {
    /// Fill in the alert for a rejection and make it visible.
    pub fn show(&mut self, rejection: Rejection) {
        self.title = rejection.title().to_string();
        self.message = rejection.message().to_string();
        self.visible = true;
    }

    /// Hide the alert. Title and message are kept until the next `show`.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// State of one game: root word, accepted words, pending alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub root: RootWord,
    pub accepted: AcceptedWords,
    pub error: ErrorState,
}

impl GameSession {
    pub fn new(root: RootWord) -> Self {
        Self {
            root,
            accepted: AcceptedWords::new(),
            error: ErrorState::default(),
        }
    }

    /// Start over with a new root word.
    pub fn reset(&mut self, root: RootWord) {
        self.root = root;
        self.accepted.clear();
        self.error = ErrorState::default();
    }
}
