use std::fmt::Write;
use std::path::Path;

use phony_core::alphabet::{self, parse_alphabets_toml};
use phony_core::{settings, AlphabetRegistry};
use serde::Serialize;

use super::{read_file, CliError};

#[derive(Debug, Serialize)]
struct AlphabetSummary<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<&'a str>,
    characters: usize,
    chain: Vec<&'a str>,
}

fn summarize(registry: &AlphabetRegistry) -> Vec<AlphabetSummary<'_>> {
    registry
        .iter()
        .map(|(name, a)| AlphabetSummary {
            name,
            fallback: a.fallback(),
            characters: a.len(),
            chain: registry.fallback_chain(name),
        })
        .collect()
}

pub fn alphabets_list(registry: &AlphabetRegistry, json: bool) -> Result<String, CliError> {
    let summaries = summarize(registry);
    if json {
        return Ok(serde_json::to_string_pretty(&summaries)?);
    }

    let mut out = String::new();
    for s in &summaries {
        let _ = write!(out, "{:<8} {:>3} characters", s.name, s.characters);
        if s.chain.len() > 1 {
            let _ = write!(out, "  ({})", s.chain.join(" → "));
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn alphabets_export() -> &'static str {
    alphabet::default_toml()
}

pub fn alphabets_validate(file: &Path) -> Result<String, CliError> {
    let content = read_file(file)?;
    let registry =
        parse_alphabets_toml(&content).map_err(|e| CliError::InvalidData(e.to_string()))?;
    let characters: usize = registry.iter().map(|(_, a)| a.len()).sum();
    Ok(format!(
        "OK: {} alphabets, {} characters",
        registry.len(),
        characters
    ))
}

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(file: &Path) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = settings::parse_settings_toml(&content)
        .map_err(|e| CliError::InvalidData(e.to_string()))?;
    Ok(format!(
        "OK: defaults.alphabet={}, defaults.letter_splitter={:?}, defaults.word_splitter={:?}, {} extra alphabets",
        s.defaults.alphabet,
        s.defaults.letter_splitter,
        s.defaults.word_splitter,
        s.alphabets().len()
    ))
}
