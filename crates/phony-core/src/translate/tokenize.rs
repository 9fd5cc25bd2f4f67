use regex::Regex;

use crate::error::TranslateError;

/// Words in input order, each an ordered run of letter tokens.
pub(crate) type TokenGrid<T> = Vec<Vec<T>>;

/// Uppercase `message` and split it into words of single characters.
///
/// Words break on any whitespace run, newlines included.
pub(crate) fn split_characters(message: &str) -> TokenGrid<char> {
    message
        .to_uppercase()
        .split_whitespace()
        .map(|word| word.chars().collect())
        .collect()
}

/// Lowercase `message` and split it into words of phonetic tokens.
///
/// Words break on `word_splitter` (case-insensitive) or on runs of CR/LF;
/// tokens break on `letter_splitter`. Both are regex fragments. Empty tokens
/// are kept; translation skips them before lookup.
pub(crate) fn split_phonetics(
    message: &str,
    word_splitter: &str,
    letter_splitter: &str,
) -> Result<TokenGrid<String>, TranslateError> {
    let words = compile(&format!("(?i)(?:{word_splitter})|[\\n\\r]+"), word_splitter)?;
    let letters = compile(&format!("(?:{letter_splitter})"), letter_splitter)?;

    let lowered = message.to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    Ok(words
        .split(trimmed)
        .map(|word| letters.split(word).map(str::to_string).collect())
        .collect())
}

fn compile(pattern: &str, splitter: &str) -> Result<Regex, TranslateError> {
    Regex::new(pattern).map_err(|e| TranslateError::InvalidSplitter {
        splitter: splitter.to_string(),
        reason: e.to_string(),
    })
}
