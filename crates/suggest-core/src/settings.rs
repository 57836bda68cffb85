//! Engine settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! A [`BinaryDictionary`](crate::BinaryDictionary) copies the settings it is
//! constructed with, so per-dictionary overrides never touch the singleton.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Output rows carry a terminator slot, and traversal scratch is sized by
/// this bound.
pub const MAX_WORD_LENGTH_LIMIT: usize = 128;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub scoring: ScoringSettings,
    pub limits: LimitSettings,
    pub search: SearchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        settings().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringSettings {
    pub typed_letter_multiplier: u32,
    pub full_word_multiplier: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LimitSettings {
    pub max_words: usize,
    pub max_word_length: usize,
    pub max_alternatives: usize,
    pub max_bigrams: usize,
    pub next_letters_size: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchSettings {
    pub missing_characters: bool,
    pub missing_characters_threshold: usize,
    pub substitutions: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

pub(crate) fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(scoring.typed_letter_multiplier);
    check_positive!(scoring.full_word_multiplier);

    check_positive!(limits.max_words);
    check_positive!(limits.max_word_length);
    check_positive!(limits.max_alternatives);
    check_positive!(limits.max_bigrams);
    check_positive!(limits.next_letters_size);

    if s.limits.max_word_length > MAX_WORD_LENGTH_LIMIT {
        return Err(SettingsError::InvalidValue {
            field: "limits.max_word_length".to_string(),
            reason: format!("must be at most {MAX_WORD_LENGTH_LIMIT}"),
        });
    }

    Ok(())
}
