//! Word-list backed dictionary oracle

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::infrastructure::traits::{Dictionary, FileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Dictionary for one language, loaded from a newline-delimited word list
/// such as `/usr/share/dict/words`.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from words in memory. Entries are trimmed and lowercased.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    /// Parse newline-delimited content.
    pub fn from_content(language: impl Into<String>, content: &str) -> Self {
        Self::new(language, content.lines())
    }

    /// Load a word list file. A file without any words is an error.
    pub fn load(fs: &dyn FileSystem, path: &Path, language: &str) -> InfraResult<Self> {
        debug!("load dictionary: {} ({})", path.display(), language);
        let content = fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read dictionary {}", path.display()), e))?;
        let dictionary = Self::from_content(language, &content);
        if dictionary.is_empty() {
            return Err(InfraError::Dictionary {
                message: format!("no words in {}", path.display()),
            });
        }
        debug!("load dictionary: {} words", dictionary.len());
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language_matches(&self.language, language) && self.words.contains(&word.to_lowercase())
    }
}

/// Compare primary language subtags: `en` matches `en_US` and `EN-gb`.
fn language_matches(a: &str, b: &str) -> bool {
    primary_subtag(a).eq_ignore_ascii_case(primary_subtag(b))
}

fn primary_subtag(language: &str) -> &str {
    language
        .split(['_', '-'])
        .next()
        .unwrap_or(language)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_word_in_list_when_querying_then_recognized_case_insensitively() {
        let dict = WordListDictionary::from_content("en", "Silk\nworm\n");
        assert!(dict.is_recognized("silk", "en"));
        assert!(dict.is_recognized("WORM", "en"));
        assert!(!dict.is_recognized("mils", "en"));
    }

    #[test]
    fn given_regional_language_code_when_querying_then_matches_primary_subtag() {
        let dict = WordListDictionary::from_content("en", "silk\n");
        assert!(dict.is_recognized("silk", "en_US"));
        assert!(dict.is_recognized("silk", "EN-gb"));
        assert!(!dict.is_recognized("silk", "de"));
    }

    #[test]
    fn given_blank_lines_when_parsing_then_ignored() {
        let dict = WordListDictionary::from_content("en", "\n  \nsilk\n\n");
        assert_eq!(dict.len(), 1);
    }
}
