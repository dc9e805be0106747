//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod dictionary;
pub mod error;
pub mod resources;
pub mod traits;

pub use dictionary::WordListDictionary;
pub use error::{InfraError, InfraResult};
