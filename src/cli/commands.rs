//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::{SessionController, SubmitOutcome};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::{output, play, CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::RootWord;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => cmd_play(cli, None),
        Some(Commands::Play { seed }) => cmd_play(cli, *seed),
        Some(Commands::Check { root, words }) => cmd_check(cli, root, words),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(skip(cli))]
fn cmd_play(cli: &Cli, seed: Option<u64>) -> CliResult<()> {
    let container = ServiceContainer::new(load_settings(cli)?)?;
    let mut controller = container.session_controller()?;
    if let Some(seed) = seed {
        controller = controller.with_seed(seed);
    }
    controller.start_game()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play::run(&mut controller, stdin.lock(), &mut stdout)
}

#[instrument(skip(cli))]
fn cmd_check(cli: &Cli, root: &str, words: &[String]) -> CliResult<()> {
    let root = RootWord::new(root).map_err(|e| CliError::InvalidArgs(e.to_string()))?;
    let container = ServiceContainer::new(load_settings(cli)?)?;
    let mut controller = container.session_controller()?;
    controller.start_game_with(root);
    check_words(&mut controller, words)
}

/// Submit each word in order to a session on a fixed root word.
///
/// Accepted words count as used for the words after them.
fn check_words(controller: &mut SessionController, words: &[String]) -> CliResult<()> {
    output::header(controller.root_word());
    let mut rejected = 0;
    for word in words {
        match controller.submit(word) {
            SubmitOutcome::Accepted(word) => output::success(&word),
            SubmitOutcome::Rejected(rejection) => {
                rejected += 1;
                output::failure(&format!(
                    "{}: {} [{}]",
                    word.trim(),
                    rejection,
                    rejection.code()
                ));
                controller.dismiss_error();
            }
            SubmitOutcome::Ignored | SubmitOutcome::AwaitingDismissal => {
                debug!("check: skipped {word:?}");
            }
        }
    }

    if rejected > 0 {
        return Err(CliError::WordsRejected { count: rejected });
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "cannot determine config directory".into(),
            })?;
            output::info(&path.display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::Validator;
    use crate::infrastructure::resources::StartWordSource;
    use crate::util::testing::{init_test_setup, FixedDictionary, MemoryFileSystem};

    fn controller_on(root: &str) -> SessionController {
        init_test_setup();
        let validator = Validator::new(Arc::new(FixedDictionary::new(&["silk", "worm"])), "en");
        let mut controller = SessionController::new(
            Arc::new(MemoryFileSystem::new()),
            validator,
            StartWordSource::Bundled,
            RootWord::new("silkworm").unwrap(),
        );
        controller.start_game_with(RootWord::new(root).unwrap());
        controller
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn given_only_valid_words_when_checking_then_ok() {
        let mut controller = controller_on("silkworm");

        let result = check_words(&mut controller, &words(&["silk", "worm"]));

        assert!(result.is_ok());
        let accepted: Vec<&str> = controller.accepted_words().iter().collect();
        assert_eq!(accepted, vec!["worm", "silk"]);
    }

    #[test]
    fn given_mixed_words_when_checking_then_counts_rejections() {
        let mut controller = controller_on("silkworm");

        // "silk" repeated is already used, "zebra" is not possible, "lorm" is unknown
        let result = check_words(
            &mut controller,
            &words(&["silk", "silk", "zebra", "worm", "lorm"]),
        );

        assert!(matches!(result, Err(CliError::WordsRejected { count: 3 })));
        assert_eq!(controller.accepted_words().len(), 2);
        assert!(!controller.error_state().visible);
    }
}
