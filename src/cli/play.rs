//! Interactive game loop
//!
//! Reads one line per submission. A rejected word shows an alert that is
//! dismissed by the next line (pressing Enter), before play continues.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::application::services::{SessionController, SubmitOutcome};
use crate::cli::CliResult;
use crate::domain::{AcceptedWords, RootWord};

pub const RESET_COMMAND: &str = ":reset";
pub const LIST_COMMAND: &str = ":list";
pub const HELP_COMMAND: &str = ":help";
pub const QUIT_COMMAND: &str = ":quit";

/// Run the game until `:quit` or end of input.
///
/// The controller must already have a game started.
pub fn run<R, W>(controller: &mut SessionController, input: R, out: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    render_title(out, controller.root_word())?;
    writeln!(out, "Type {HELP_COMMAND} for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} ", ">".cyan())?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("play: end of input");
            break;
        };

        if controller.error_state().visible {
            controller.dismiss_error();
            continue;
        }

        match line.trim() {
            QUIT_COMMAND => break,
            RESET_COMMAND => {
                controller.start_game()?;
                render_title(out, controller.root_word())?;
            }
            LIST_COMMAND => render_words(out, controller.accepted_words())?,
            HELP_COMMAND => render_help(out)?,
            _ => match controller.submit(&line) {
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Accepted(word) => {
                    writeln!(out, "{} {}", "✓".green(), word)?;
                    render_words(out, controller.accepted_words())?;
                }
                SubmitOutcome::Rejected(_) => {
                    let alert = controller.error_state();
                    writeln!(out, "{}", alert.title.red().bold())?;
                    writeln!(out, "{}", alert.message)?;
                    writeln!(out, "{}", "[OK: press Enter]".dimmed())?;
                }
                SubmitOutcome::AwaitingDismissal => {
                    writeln!(out, "{}", "[OK: press Enter]".dimmed())?;
                }
            },
        }
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

fn render_title<W: Write>(out: &mut W, root: &RootWord) -> CliResult<()> {
    writeln!(out, "{}", root.as_str().to_uppercase().cyan().bold())?;
    Ok(())
}

/// Newest first, each with its letter count.
fn render_words<W: Write>(out: &mut W, words: &AcceptedWords) -> CliResult<()> {
    if words.is_empty() {
        writeln!(out, "{}", "(no words yet)".dimmed())?;
    }
    for word in words.iter() {
        writeln!(out, "  {:>2}  {}", word.chars().count(), word)?;
    }
    Ok(())
}

fn render_help<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "  {RESET_COMMAND}  start over with a new root word")?;
    writeln!(out, "  {LIST_COMMAND}   show accepted words")?;
    writeln!(out, "  {QUIT_COMMAND}   leave the game")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use crate::application::services::Validator;
    use crate::infrastructure::resources::StartWordSource;
    use crate::util::testing::{init_test_setup, FixedDictionary, MemoryFileSystem};

    fn controller() -> SessionController {
        init_test_setup();
        let fs = MemoryFileSystem::new().with_file("/start.txt", "silkworm\n");
        let validator = Validator::new(
            Arc::new(FixedDictionary::new(&["silk", "worm", "milk"])),
            "en",
        );
        let mut controller = SessionController::new(
            Arc::new(fs),
            validator,
            StartWordSource::File("/start.txt".into()),
            RootWord::new("silkworm").unwrap(),
        );
        controller.start_game().expect("start game");
        controller
    }

    fn play(controller: &mut SessionController, input: &str) -> String {
        let mut out = Vec::new();
        run(controller, Cursor::new(input.to_string()), &mut out).expect("run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn given_valid_words_when_playing_then_accepts_newest_first() {
        let mut controller = controller();

        play(&mut controller, "silk\nworm\n:quit\n");

        let words: Vec<&str> = controller.accepted_words().iter().collect();
        assert_eq!(words, vec!["worm", "silk"]);
    }

    #[test]
    fn given_rejection_when_playing_then_next_line_dismisses_alert() {
        let mut controller = controller();

        // "silk" twice: second is rejected, empty line dismisses, then "milk"
        let output = play(&mut controller, "silk\nsilk\n\nmilk\n");

        assert!(output.contains("Word used already"));
        assert!(output.contains("Be more original"));
        assert!(!controller.error_state().visible);
        assert_eq!(controller.accepted_words().newest(), Some("milk"));
    }

    #[test]
    fn given_line_while_alert_visible_when_playing_then_line_only_dismisses() {
        let mut controller = controller();

        play(&mut controller, "xyz\nsilk\n");

        assert!(controller.accepted_words().is_empty());
    }

    #[test]
    fn given_reset_command_when_playing_then_clears_words() {
        let mut controller = controller();

        let output = play(&mut controller, "silk\n:reset\n");

        assert!(controller.accepted_words().is_empty());
        assert!(output.contains("SILKWORM"));
    }

    #[test]
    fn given_list_command_when_playing_then_shows_words_newest_first_with_counts() {
        let mut controller = controller();

        let output = play(&mut controller, "milk\nsilk\n:list\n:quit\n");

        // printed once after "silk" is accepted and once for :list
        let listing = "   4  silk\n   4  milk\n";
        assert_eq!(output.matches(listing).count(), 2);
    }

    #[test]
    fn given_help_command_when_playing_then_lists_commands() {
        let mut controller = controller();

        let output = play(&mut controller, ":help\n");

        assert!(output.contains(RESET_COMMAND));
        assert!(output.contains(LIST_COMMAND));
        assert!(output.contains(QUIT_COMMAND));
    }
}
