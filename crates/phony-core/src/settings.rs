//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings seed new engines (`Phony::new`); they never change an engine
//! that already exists.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::alphabet::{build_registry, AlphabetConfigError, AlphabetEntry, AlphabetRegistry};
use crate::options::Options;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

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
    #[error(transparent)]
    Alphabet(#[from] AlphabetConfigError),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub defaults: Options,
    #[serde(default, rename = "alphabets")]
    alphabet_entries: BTreeMap<String, AlphabetEntry>,
    /// Parsed `[alphabets]`, merged over the builtin tables by `Phony::new`.
    #[serde(skip)]
    alphabets: AlphabetRegistry,
}

impl Settings {
    /// Extra alphabets declared in the settings file.
    pub fn alphabets(&self) -> &AlphabetRegistry {
        &self.alphabets
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.alphabets = build_registry(&s.alphabet_entries)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_pattern {
        ($field:ident) => {
            if let Err(e) = Regex::new(&s.defaults.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!("defaults.", stringify!($field)).to_string(),
                    reason: e.to_string(),
                });
            }
        };
    }

    if s.defaults.alphabet.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "defaults.alphabet".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    check_pattern!(letter_splitter);
    check_pattern!(word_splitter);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.defaults, Options::default());
        assert!(s.alphabets().is_empty());
    }

    #[test]
    fn global_settings_match_default() {
        assert_eq!(settings().defaults, Options::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[defaults]
alphabet = "icao"
letter_splitter = "-"
word_splitter = "break"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.defaults.alphabet, "icao");
        assert_eq!(s.defaults.letter_splitter, "-");
        assert_eq!(s.defaults.word_splitter, "break");
    }

    #[test]
    fn partial_defaults_section() {
        let toml = r#"
[defaults]
alphabet = "faa"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.defaults.alphabet, "faa");
        assert_eq!(s.defaults.letter_splitter, " ");
        assert_eq!(s.defaults.word_splitter, "space");
    }

    #[test]
    fn custom_alphabets_section() {
        let toml = r#"
[defaults]
alphabet = "foo"

[alphabets.foo]
fallback = "itu"

[alphabets.foo.characters]
F = "feck"
"#;
        let s = parse_settings_toml(toml).unwrap();
        let foo = s.alphabets().get("foo").unwrap();
        assert_eq!(foo.phonetic('F'), Some("feck"));
        assert_eq!(foo.fallback(), Some("itu"));
    }

    #[test]
    fn error_empty_alphabet() {
        let toml = r#"
[defaults]
alphabet = ""
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("defaults.alphabet"));
    }

    #[test]
    fn error_bad_word_splitter() {
        let toml = r#"
[defaults]
word_splitter = "(unclosed"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("defaults.word_splitter"));
    }

    #[test]
    fn error_bad_alphabet_entry() {
        let toml = r#"
[defaults]
alphabet = "itu"

[alphabets.bad.characters]
XY = "nope"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Alphabet(AlphabetConfigError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[other]\nx = 1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
