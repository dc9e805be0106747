//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{SessionController, Validator};
use crate::application::ApplicationError;
use crate::config::Settings;
use crate::domain::RootWord;
use crate::infrastructure::resources::StartWordSource;
use crate::infrastructure::traits::{Dictionary, FileSystem, RealFileSystem};
use crate::infrastructure::{InfraResult, WordListDictionary};

/// Container holding the settings and I/O dependencies services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Dictionary oracle
    pub dictionary: Arc<dyn Dictionary>,
}

impl ServiceContainer {
    /// Create a container with real implementations.
    ///
    /// Loads the configured dictionary word list.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let dictionary =
            WordListDictionary::load(fs.as_ref(), &settings.dictionary, &settings.language)?;
        Ok(Self::with_deps(settings, fs, Arc::new(dictionary)))
    }

    /// Create a container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            dictionary,
        }
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.dictionary.clone(), self.settings.language.clone())
    }

    /// Build a session controller. The game is not started yet.
    pub fn session_controller(&self) -> InfraResult<SessionController> {
        let fallback =
            RootWord::new(&self.settings.fallback_word).map_err(ApplicationError::from)?;
        Ok(SessionController::new(
            self.fs.clone(),
            self.validator(),
            StartWordSource::from_setting(self.settings.start_words.clone()),
            fallback,
        ))
    }
}
