//! Tests for WordListDictionary loading and ServiceContainer wiring

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use wordscramble::application::services::SubmitOutcome;
use wordscramble::config::Settings;
use wordscramble::domain::Rejection;
use wordscramble::infrastructure::di::ServiceContainer;
use wordscramble::infrastructure::traits::{Dictionary, RealFileSystem};
use wordscramble::infrastructure::{InfraError, WordListDictionary};
use wordscramble::util::testing::init_test_setup;

/// Helper to create temp word list files for testing
fn create_word_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write word file");
    path
}

#[test]
fn given_word_list_file_when_loading_then_recognizes_its_words() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = create_word_file(&temp, "words", "Silk\nworm\nmilk\n");

    let dict = WordListDictionary::load(&RealFileSystem, &path, "en").unwrap();

    assert_eq!(dict.len(), 3);
    assert!(dict.is_recognized("silk", "en"));
    assert!(dict.is_recognized("milk", "en_US"));
    assert!(!dict.is_recognized("lorm", "en"));
    assert!(!dict.is_recognized("silk", "fr"));
}

#[test]
fn given_missing_file_when_loading_dictionary_then_io_error() {
    init_test_setup();
    let temp = TempDir::new().unwrap();

    let result = WordListDictionary::load(&RealFileSystem, &temp.path().join("nope"), "en");

    assert!(matches!(result, Err(InfraError::Io { .. })));
}

#[test]
fn given_empty_file_when_loading_dictionary_then_dictionary_error() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = create_word_file(&temp, "words", "\n\n");

    let result = WordListDictionary::load(&RealFileSystem, &path, "en");

    assert!(matches!(result, Err(InfraError::Dictionary { .. })));
}

#[test]
fn given_settings_with_files_when_building_container_then_plays_against_them() {
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let dictionary = create_word_file(&temp, "words", "silk\nworm\n");
    let start_words = create_word_file(&temp, "start.txt", "silkworm\n");
    let settings = Settings {
        start_words: Some(start_words),
        dictionary,
        ..Settings::default()
    };

    let container = ServiceContainer::new(settings).unwrap();
    let mut controller = container.session_controller().unwrap();
    controller.start_game().unwrap();

    assert_eq!(controller.root_word().as_str(), "silkworm");
    assert_eq!(
        controller.submit("silk"),
        SubmitOutcome::Accepted("silk".into())
    );
    assert_eq!(
        controller.submit("lorm"),
        SubmitOutcome::Rejected(Rejection::NotReal)
    );
}

#[test]
fn given_language_mismatch_when_validating_then_not_real() {
    init_test_setup();
    let dictionary = WordListDictionary::new("de", ["silk"]);
    let settings = Settings {
        language: "en".into(),
        ..Settings::default()
    };
    let container =
        ServiceContainer::with_deps(settings, Arc::new(RealFileSystem), Arc::new(dictionary));
    let mut controller = container.session_controller().unwrap();
    controller.start_game_with("silkworm".parse().unwrap());

    assert_eq!(
        controller.submit("silk"),
        SubmitOutcome::Rejected(Rejection::NotReal)
    );
}

#[test]
fn given_blank_fallback_word_when_building_controller_then_fails() {
    init_test_setup();
    let settings = Settings {
        fallback_word: " ".into(),
        ..Settings::default()
    };
    let container = ServiceContainer::with_deps(
        settings,
        Arc::new(RealFileSystem),
        Arc::new(WordListDictionary::new("en", ["silk"])),
    );

    assert!(container.session_controller().is_err());
}
