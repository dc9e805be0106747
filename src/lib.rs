//! wordscramble: spell new words from the letters of a random root word.
//!
//! Layers, from the inside out: `domain` (session state and pure checks),
//! `application` (validator and session controller), `infrastructure`
//! (file system, dictionary oracle, start words, wiring), `cli`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
