//! Game configuration.
//!
//! Values come from a TOML file and can be overridden on the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::game::{DEFAULT_FLASH_DURATION, DEFAULT_MAX_GUESSES, MAX_GUESSES_LIMIT};
use crate::wordlists::{Vocabulary, loader};

/// File looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "hadej-slovo.toml";

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Guesses per game.
    #[serde(default = "default_max_guesses")]
    pub max_guesses: usize,
    /// How long the invalid flash stays up, in milliseconds.
    #[serde(default = "default_invalid_flash_ms")]
    pub invalid_flash_ms: u64,
    /// Word list file; the embedded list when absent.
    #[serde(default)]
    pub word_list: Option<PathBuf>,
}

fn default_max_guesses() -> usize {
    DEFAULT_MAX_GUESSES
}
fn default_invalid_flash_ms() -> u64 {
    DEFAULT_FLASH_DURATION.as_millis() as u64
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: default_max_guesses(),
            invalid_flash_ms: default_invalid_flash_ms(),
            word_list: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys or invalid values.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_guesses` is zero or above `MAX_GUESSES_LIMIT`.
    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == 0 {
            anyhow::bail!("max_guesses must be at least 1");
        }
        if self.max_guesses > MAX_GUESSES_LIMIT {
            anyhow::bail!(
                "max_guesses must be at most {MAX_GUESSES_LIMIT}, got {}",
                self.max_guesses
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.invalid_flash_ms)
    }
}

/// Load config from an explicit path, or from [`DEFAULT_CONFIG_FILE`] if it exists.
///
/// Falls back to defaults when no path is given and the default file is missing.
///
/// # Errors
///
/// Returns an error if an explicit path does not exist, or the file cannot be
/// read or parsed.
pub fn load_config_from(path: Option<&Path>) -> Result<GameConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    let Some(config_path) = config_path else {
        debug!("no config file, using defaults");
        return Ok(GameConfig::default());
    };

    debug!(path = %config_path.display(), "loading config");
    let text = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    GameConfig::from_toml(&text).with_context(|| format!("in {}", config_path.display()))
}

/// Load the config file and apply a command-line `max_guesses` override.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, or if the resulting
/// `max_guesses` is out of range.
pub fn resolve_config(path: Option<&Path>, max_guesses: Option<usize>) -> Result<GameConfig> {
    let mut config = load_config_from(path)?;
    if let Some(max_guesses) = max_guesses {
        debug!(max_guesses, "max_guesses overridden");
        config.max_guesses = max_guesses;
    }
    config.validate()?;
    Ok(config)
}

/// Load the vocabulary from `selector`, else the configured `word_list`,
/// else the embedded list.
///
/// # Errors
///
/// Returns an error if the chosen word list file cannot be read.
pub fn resolve_vocabulary(selector: Option<&str>, config: &GameConfig) -> Result<Vocabulary> {
    match (selector, config.word_list.as_deref()) {
        (Some(selector), _) => {
            loader::load(selector).with_context(|| format!("failed to load wordlist {selector}"))
        }
        (None, Some(path)) => loader::load_from_file(path)
            .with_context(|| format!("failed to load wordlist {}", path.display())),
        (None, None) => Ok(Vocabulary::embedded()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.invalid_flash_ms, 700);
        assert_eq!(config.word_list, None);
        assert_eq!(config.flash_duration(), Duration::from_millis(700));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn parse_all_fields() {
        let config = GameConfig::from_toml(
            r#"
            max_guesses = 8
            invalid_flash_ms = 250
            word_list = "data/words.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_guesses, 8);
        assert_eq!(config.flash_duration(), Duration::from_millis(250));
        assert_eq!(config.word_list, Some(PathBuf::from("data/words.txt")));
    }

    #[test]
    fn zero_guesses_rejected() {
        let err = GameConfig::from_toml("max_guesses = 0").unwrap_err();
        assert!(err.to_string().contains("max_guesses"));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(GameConfig::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_guesses = 4").unwrap();

        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.max_guesses, 4);
    }

    #[test]
    fn missing_explicit_path_errors() {
        let err = load_config_from(Some(Path::new("/no/such/hadej-slovo.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn too_many_guesses_rejected() {
        let err = GameConfig::from_toml("max_guesses = 101").unwrap_err();
        assert!(err.to_string().contains("at most 100"));
        assert!(GameConfig::from_toml("max_guesses = 9223372036854775807").is_err());
        assert_eq!(GameConfig::from_toml("max_guesses = 100").unwrap().max_guesses, 100);
    }

    #[test]
    fn override_beats_file_max_guesses() {
        let file = temp_file("max_guesses = 4\n");

        assert_eq!(resolve_config(Some(file.path()), None).unwrap().max_guesses, 4);
        assert_eq!(resolve_config(Some(file.path()), Some(9)).unwrap().max_guesses, 9);
    }

    #[test]
    fn invalid_override_rejected() {
        let file = temp_file("max_guesses = 4\n");

        assert!(resolve_config(Some(file.path()), Some(0)).is_err());
        let err = resolve_config(Some(file.path()), Some(usize::MAX)).unwrap_err();
        assert!(err.to_string().contains("max_guesses"));
    }

    #[test]
    fn override_cannot_rescue_invalid_file() {
        let file = temp_file("max_guesses = 0\n");
        assert!(resolve_config(Some(file.path()), Some(6)).is_err());
    }

    #[test]
    fn selector_beats_config_word_list() {
        let chosen = temp_file("kočka\nšátek\n");
        let configured = temp_file("apple\nlemon\n");
        let config = GameConfig {
            word_list: Some(configured.path().to_path_buf()),
            ..GameConfig::default()
        };

        let selector = chosen.path().to_str().unwrap();
        let vocab = resolve_vocabulary(Some(selector), &config).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains(&word("kočka")));
        assert!(!vocab.contains(&word("apple")));

        let vocab = resolve_vocabulary(Some(loader::EMBEDDED), &config).unwrap();
        assert!(!vocab.contains(&word("apple")));
        assert!(vocab.contains(&word("kniha")));
    }

    #[test]
    fn config_word_list_beats_embedded() {
        let configured = temp_file("apple\nlemon\n");
        let config = GameConfig {
            word_list: Some(configured.path().to_path_buf()),
            ..GameConfig::default()
        };

        let vocab = resolve_vocabulary(None, &config).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains(&word("lemon")));
    }

    #[test]
    fn embedded_when_nothing_configured() {
        let vocab = resolve_vocabulary(None, &GameConfig::default()).unwrap();
        assert!(!vocab.is_fallback());
        assert!(vocab.contains(&word("kniha")));
    }

    #[test]
    fn missing_word_list_errors() {
        let config = GameConfig {
            word_list: Some(PathBuf::from("/no/such/words.txt")),
            ..GameConfig::default()
        };
        let err = resolve_vocabulary(None, &config).unwrap_err();
        assert!(err.to_string().contains("failed to load wordlist"));
    }
}
