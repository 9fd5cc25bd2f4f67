//! Translation options and their merge against engine defaults.

use serde::Deserialize;

/// A complete set of translation options.
///
/// `letter_splitter` and `word_splitter` are regex fragments when splitting
/// phonetic input (`translate_from`) and literal text when joining phonetic
/// output (`translate_to`). Escape them with `regex::escape` for literal
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub alphabet: String,
    pub letter_splitter: String,
    pub word_splitter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: "itu".to_string(),
            letter_splitter: " ".to_string(),
            word_splitter: "space".to_string(),
        }
    }
}

impl Options {
    /// Fill in `overrides` from `self`; supplied keys win. The result has
    /// `alphabet` and `word_splitter` lowercased.
    pub fn merge(&self, overrides: &TranslateOptions) -> Options {
        let pick = |o: &Option<String>, d: &String| o.as_ref().unwrap_or(d).clone();
        Options {
            alphabet: pick(&overrides.alphabet, &self.alphabet).to_lowercase(),
            letter_splitter: pick(&overrides.letter_splitter, &self.letter_splitter),
            word_splitter: pick(&overrides.word_splitter, &self.word_splitter).to_lowercase(),
        }
    }
}

/// Per-call options; `None` falls back to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub alphabet: Option<String>,
    pub letter_splitter: Option<String>,
    pub word_splitter: Option<String>,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn letter_splitter(mut self, splitter: impl Into<String>) -> Self {
        self.letter_splitter = Some(splitter.into());
        self
    }

    pub fn word_splitter(mut self, splitter: impl Into<String>) -> Self {
        self.word_splitter = Some(splitter.into());
        self
    }
}
