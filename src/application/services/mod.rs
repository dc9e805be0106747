//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Dictionary)
//! but are themselves concrete structs, not traits.

mod session;
mod validator;

pub use session::{SessionController, SubmitOutcome};
pub use validator::Validator;
