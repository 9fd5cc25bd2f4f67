use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::{normalize_name, Alphabet, AlphabetRegistry};

const DEFAULT_TOML: &str = include_str!("default_alphabets.toml");

#[derive(Deserialize)]
struct AlphabetsConfig {
    alphabets: BTreeMap<String, AlphabetEntry>,
}

/// One `[alphabets.<name>]` table as written in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AlphabetEntry {
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default)]
    characters: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlphabetConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[alphabets] table is empty")]
    Empty,
    #[error("alphabet {alphabet}: key {key:?} must be exactly one character")]
    InvalidCharacter { alphabet: String, key: String },
    #[error("alphabet {alphabet}: empty phonetic for key {key:?}")]
    EmptyValue { alphabet: String, key: String },
    #[error("alphabet {alphabet}: phonetic {phonetic:?} is mapped more than once")]
    DuplicatePhonetic { alphabet: String, phonetic: String },
    #[error("alphabet {alphabet} is defined more than once (names ignore case)")]
    DuplicateAlphabet { alphabet: String },
}

/// Returns the embedded builtin alphabet TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Parse TOML text into an [`AlphabetRegistry`].
pub fn parse_alphabets_toml(toml_str: &str) -> Result<AlphabetRegistry, AlphabetConfigError> {
    let config: AlphabetsConfig =
        toml::from_str(toml_str).map_err(|e| AlphabetConfigError::Parse(e.to_string()))?;

    if config.alphabets.is_empty() {
        return Err(AlphabetConfigError::Empty);
    }

    build_registry(&config.alphabets)
}

/// Validate raw entries and convert them into a registry.
pub(crate) fn build_registry(
    entries: &BTreeMap<String, AlphabetEntry>,
) -> Result<AlphabetRegistry, AlphabetConfigError> {
    let mut registry = AlphabetRegistry::new();
    for (name, entry) in entries {
        if registry.contains(name) {
            return Err(AlphabetConfigError::DuplicateAlphabet {
                alphabet: normalize_name(name).into_owned(),
            });
        }
        registry.insert(name, build_alphabet(name, entry)?);
    }
    Ok(registry)
}

fn build_alphabet(name: &str, entry: &AlphabetEntry) -> Result<Alphabet, AlphabetConfigError> {
    let mut alphabet = Alphabet::new();
    alphabet.set_fallback(entry.fallback.as_deref());

    let mut seen = HashSet::new();

    for (key, phonetic) in &entry.characters {
        let mut chars = key.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            return Err(AlphabetConfigError::InvalidCharacter {
                alphabet: normalize_name(name).into_owned(),
                key: key.clone(),
            });
        };
        if phonetic.is_empty() {
            return Err(AlphabetConfigError::EmptyValue {
                alphabet: normalize_name(name).into_owned(),
                key: key.clone(),
            });
        }
        if !seen.insert(phonetic.to_lowercase()) {
            return Err(AlphabetConfigError::DuplicatePhonetic {
                alphabet: normalize_name(name).into_owned(),
                phonetic: phonetic.clone(),
            });
        }
        alphabet.insert(character, phonetic.as_str());
    }

    Ok(alphabet)
}
