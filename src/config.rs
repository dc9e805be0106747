//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wordscramble/wordscramble.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `WORDSCRAMBLE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::RootWord;
use crate::util::path::expand_env_vars;

/// Word list used by the dictionary oracle when nothing else is configured.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Root word used when the start-word list has no usable entries.
pub const DEFAULT_FALLBACK_WORD: &str = "silkworm";

/// Unified configuration for wordscramble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Start-word list (default: bundled list)
    pub start_words: Option<PathBuf>,
    /// Dictionary word list for the realness check
    pub dictionary: PathBuf,
    /// Language code passed to the dictionary
    pub language: String,
    /// Root word when the start-word list is empty
    pub fallback_word: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            language: "en".into(),
            fallback_word: DEFAULT_FALLBACK_WORD.into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub start_words: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub language: Option<String>,
    pub fallback_word: Option<String>,
}

/// Get the XDG config directory for wordscramble.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordscramble").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wordscramble.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        if let Some(start_words) = &self.start_words {
            let expanded = expand_env_vars(start_words.to_string_lossy().as_ref());
            self.start_words = Some(PathBuf::from(expanded));
        }
        let expanded = expand_env_vars(self.dictionary.to_string_lossy().as_ref());
        self.dictionary = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            start_words: overlay
                .start_words
                .clone()
                .or_else(|| self.start_words.clone()),
            dictionary: overlay
                .dictionary
                .clone()
                .unwrap_or_else(|| self.dictionary.clone()),
            language: overlay
                .language
                .clone()
                .unwrap_or_else(|| self.language.clone()),
            fallback_word: overlay
                .fallback_word
                .clone()
                .unwrap_or_else(|| self.fallback_word.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional config file that must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/wordscramble/wordscramble.toml`
    /// 3. Local config file
    /// 4. Environment variables: `WORDSCRAMBLE_*` prefix
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(local_path) = local_config {
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Apply WORDSCRAMBLE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("WORDSCRAMBLE"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("start_words") {
            settings.start_words = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("dictionary") {
            settings.dictionary = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("language") {
            settings.language = val;
        }
        if let Ok(val) = config.get_string("fallback_word") {
            settings.fallback_word = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        RootWord::new(&self.fallback_word).map_err(|e| ApplicationError::Config {
            message: format!("fallback_word: {e}"),
        })?;
        if self.language.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "language must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# wordscramble configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/wordscramble/wordscramble.toml
#   Local:  file passed with --config
#   Env:    WORDSCRAMBLE_* environment variables (e.g. WORDSCRAMBLE_LANGUAGE=en)

# Newline-delimited list of root words (default: bundled list)
# start_words = "~/games/start.txt"

# Dictionary word list used to decide whether a word is real
# dictionary = "/usr/share/dict/words"

# Language code passed to the dictionary
# language = "en"

# Root word used when the start-word list is empty
# fallback_word = "silkworm"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
