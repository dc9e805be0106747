//! Start-word lists: the bundled default and configured files

use std::fmt;
use std::path::PathBuf;

use crate::domain::RootWord;

/// Where root words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartWordSource {
    /// List compiled into the binary
    Bundled,
    /// Newline-delimited file, read on every game start
    File(PathBuf),
}

impl StartWordSource {
    pub const BUNDLED: &'static str = include_str!("../../resources/start.txt");

    pub fn from_setting(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }
}

impl fmt::Display for StartWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartWordSource::Bundled => f.write_str("<bundled start words>"),
            StartWordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a newline-delimited list into root words.
///
/// Blank lines and lines that are not a single word are skipped.
pub fn parse_word_list(content: &str) -> Vec<RootWord> {
    content
        .lines()
        .filter_map(|line| RootWord::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_lines_when_parsing_then_skips_them() {
        let words = parse_word_list("silkworm\n\n  \nPEPPERMINT\r\n");
        let words: Vec<&str> = words.iter().map(RootWord::as_str).collect();
        assert_eq!(words, vec!["silkworm", "peppermint"]);
    }

    #[test]
    fn given_bundled_list_when_parsing_then_contains_eight_letter_words() {
        let words = parse_word_list(StartWordSource::BUNDLED);
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.as_str().chars().count() == 8));
    }

    #[test]
    fn given_no_path_when_building_source_then_uses_bundled() {
        assert_eq!(StartWordSource::from_setting(None), StartWordSource::Bundled);
        assert_eq!(
            StartWordSource::from_setting(Some(PathBuf::from("/tmp/start.txt"))),
            StartWordSource::File(PathBuf::from("/tmp/start.txt"))
        );
    }
}
