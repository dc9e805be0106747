//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("root word must not be empty")]
    EmptyRootWord,

    #[error("root word contains whitespace: {0:?}")]
    InvalidRootWord(String),
}
