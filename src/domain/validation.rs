//! Pure word checks: originality and feasibility
//!
//! Realness needs a dictionary and lives in the application layer.

use crate::domain::{AcceptedWords, RootWord};

/// Shortest candidate that can be accepted, in characters.
pub const MIN_WORD_LENGTH: usize = 3;

/// Candidate has not been accepted before (exact match).
pub fn is_original(word: &str, accepted: &AcceptedWords) -> bool {
    !accepted.contains(word)
}

/// Candidate is long enough, is not the root itself, and can be spelled
/// from the root's letters.
pub fn is_possible(word: &str, root: &RootWord) -> bool {
    if word.chars().count() < MIN_WORD_LENGTH {
        return false;
    }
    if word == root.as_str() {
        return false;
    }
    can_spell(word, root.as_str())
}

/// Every letter of `word` can be taken from `letters`, each letter of
/// `letters` used at most once.
///
/// Consumes one matching letter per character of `word`; order does not
/// matter.
pub fn can_spell(word: &str, letters: &str) -> bool {
    let mut pool: Vec<char> = letters.chars().collect();
    for letter in word.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(pos) => {
                pool.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(word: &str) -> RootWord {
        RootWord::new(word).expect("valid root")
    }

    #[test]
    fn given_repeated_letters_when_available_then_can_spell() {
        assert!(can_spell("pepper", "peppermint"));
        assert!(can_spell("sip", "mississippi"));
        assert!(can_spell("ssss", "mississippi"));
    }

    #[test]
    fn given_more_repeats_than_root_has_when_spelling_then_fails() {
        assert!(!can_spell("mmm", "mississippi"));
        assert!(!can_spell("sssss", "mississippi"));
        assert!(!can_spell("peppper", "peppermint"));
    }

    #[test]
    fn given_letter_order_differs_when_spelling_then_succeeds() {
        assert!(can_spell("mrow", "silkworm"));
    }

    #[test]
    fn given_short_word_when_checking_feasibility_then_rejects() {
        assert!(!is_possible("si", &root("silkworm")));
        assert!(!is_possible("s", &root("silkworm")));
    }

    #[test]
    fn given_root_itself_when_checking_feasibility_then_rejects() {
        assert!(!is_possible("silkworm", &root("silkworm")));
    }

    #[test]
    fn given_subset_word_when_checking_feasibility_then_accepts() {
        assert!(is_possible("silk", &root("silkworm")));
        assert!(is_possible("worm", &root("silkworm")));
    }

    #[test]
    fn given_accepted_word_when_checking_originality_then_rejects() {
        let mut accepted = AcceptedWords::new();
        accepted.insert_newest("silk".into());

        assert!(!is_original("silk", &accepted));
        assert!(is_original("worm", &accepted));
    }
}
