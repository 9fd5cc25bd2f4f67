//! Bidirectional phonetic translation.
//!
//! [`Phony`] owns an [`AlphabetRegistry`] and a set of default [`Options`].
//! `translate_to` spells text out in phonetic words; `translate_from` reads
//! phonetic words back into text. Both are best-effort: characters or tokens
//! the active alphabet cannot resolve are dropped, and an unknown alphabet
//! yields an empty string.

mod tokenize;


use tracing::{debug, debug_span};

use crate::alphabet::AlphabetRegistry;
use crate::error::TranslateError;
use crate::options::{Options, TranslateOptions};
use crate::settings::settings;
use crate::text::title_case;

use tokenize::{split_characters, split_phonetics};

/// A translation engine with its own alphabets and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phony {
    alphabets: AlphabetRegistry,
    defaults: Options,
}

impl Default for Phony {
    fn default() -> Self {
        Self::new()
    }
}

impl Phony {
    /// Builtin alphabets plus whatever the global settings add, with the
    /// settings' default options.
    pub fn new() -> Self {
        let s = settings();
        let mut alphabets = AlphabetRegistry::builtin();
        alphabets.extend(s.alphabets().clone());
        Self::with_config(alphabets, s.defaults.clone())
    }

    /// Builtin alphabets and built-in default options, ignoring settings.
    pub fn builtin() -> Self {
        Self::with_config(AlphabetRegistry::builtin(), Options::default())
    }

    pub fn with_config(alphabets: AlphabetRegistry, defaults: Options) -> Self {
        Self {
            alphabets,
            defaults,
        }
    }

    pub fn alphabets(&self) -> &AlphabetRegistry {
        &self.alphabets
    }

    /// Changes apply to the next translation.
    pub fn alphabets_mut(&mut self) -> &mut AlphabetRegistry {
        &mut self.alphabets
    }

    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Options {
        &mut self.defaults
    }

    /// Translate `message` into the phonetic alphabet.
    ///
    /// Letters within a word are joined with `letter_splitter`; words are
    /// joined with `letter_splitter + Title(word_splitter) + letter_splitter`,
    /// so the defaults give `"Alfa Bravo Space Charlie"` for `"ab c"`.
    pub fn translate_to(&self, message: &str, options: &TranslateOptions) -> String {
        let options = self.defaults.merge(options);
        let _span = debug_span!("translate_to", alphabet = %options.alphabet).entered();

        let grid = split_characters(message);
        if !self.alphabets.contains(&options.alphabet) {
            debug!("unknown alphabet");
            return String::new();
        }

        let letter_splitter = options.letter_splitter.as_str();
        let word_separator = format!(
            "{letter_splitter}{}{letter_splitter}",
            title_case(&options.word_splitter)
        );

        let mut result = String::new();
        let mut dropped = 0usize;
        for (i, word) in grid.iter().enumerate() {
            if i > 0 {
                result.push_str(&word_separator);
            }
            let mut resolved_in_word = 0usize;
            for &character in word {
                match self.alphabets.resolve_to_phonetic(&options.alphabet, character) {
                    Some(phonetic) => {
                        if resolved_in_word > 0 {
                            result.push_str(letter_splitter);
                        }
                        result.push_str(&title_case(phonetic));
                        resolved_in_word += 1;
                    }
                    None => dropped += 1,
                }
            }
        }

        debug!(words = grid.len(), dropped);
        result
    }

    /// Translate `message` out of the phonetic alphabet.
    ///
    /// Words are rejoined with a single space and letters concatenate
    /// directly. Fails only when a splitter is not a valid pattern.
    pub fn translate_from(
        &self,
        message: &str,
        options: &TranslateOptions,
    ) -> Result<String, TranslateError> {
        let options = self.defaults.merge(options);
        let _span = debug_span!("translate_from", alphabet = %options.alphabet).entered();

        let grid = split_phonetics(message, &options.word_splitter, &options.letter_splitter)?;
        if !self.alphabets.contains(&options.alphabet) {
            debug!("unknown alphabet");
            return Ok(String::new());
        }

        let mut result = String::new();
        let mut dropped = 0usize;
        for (i, word) in grid.iter().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            // Empty tokens come from adjacent splitters and never resolve.
            for token in word.iter().filter(|t| !t.is_empty()) {
                match self.alphabets.resolve_to_character(&options.alphabet, token) {
                    Some(character) => result.push(character),
                    None => dropped += 1,
                }
            }
        }

        debug!(words = grid.len(), dropped);
        Ok(result)
    }
}
