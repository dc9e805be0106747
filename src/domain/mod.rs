//! Domain layer: session state and word validation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod validation;

pub use entities::*;
pub use error::DomainError;
pub use validation::{can_spell, is_original, is_possible, MIN_WORD_LENGTH};
