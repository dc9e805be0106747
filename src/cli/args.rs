//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Spell new words from the letters of a random root word
#[derive(Parser, Debug)]
#[command(name = "wordscramble")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "WORDSCRAMBLE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively (default)
    Play {
        /// Seed for root word selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate words against a given root word, in order
    Check {
        /// Root word to draw letters from
        root: String,
        /// Words to submit; accepted words count as used for later ones
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Print the global config file path
    Path,
    /// Print a commented config template
    Template,
}
