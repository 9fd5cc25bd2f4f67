use std::io::Read;
use std::path::{Path, PathBuf};

use phony_core::alphabet::parse_alphabets_toml;
use phony_core::{decode_message, settings, Phony, TranslateOptions};
use tracing::debug;

use super::{read_file, CliError};

/// Which way a message is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    To,
    From,
}

/// Everything a `to` / `from` invocation needs besides the message itself.
#[derive(Debug, Clone, Default)]
pub struct TranslateRequest {
    pub options: TranslateOptions,
    /// Extra alphabet TOML merged over the builtins.
    pub alphabets: Option<PathBuf>,
    /// Settings TOML installed before the engine is built.
    pub settings: Option<PathBuf>,
}

/// Build an engine from the (optional) settings and alphabet files.
pub fn build_engine(request: &TranslateRequest) -> Result<Phony, CliError> {
    if let Some(path) = &request.settings {
        let content = read_file(path)?;
        settings::init_custom(content).map_err(|e| CliError::InvalidData(e.to_string()))?;
    }
    let mut phony = Phony::new();
    if let Some(path) = &request.alphabets {
        merge_alphabets(&mut phony, path)?;
    }
    Ok(phony)
}

fn merge_alphabets(phony: &mut Phony, path: &Path) -> Result<(), CliError> {
    let content = read_file(path)?;
    let registry = parse_alphabets_toml(&content)
        .map_err(|e| CliError::InvalidData(format!("{}: {e}", path.display())))?;
    debug!(count = registry.len(), path = %path.display(), "merging alphabets");
    phony.alphabets_mut().extend(registry);
    Ok(())
}

/// The message argument, or all of `input` when none was given.
pub fn read_message(message: Option<String>, mut input: impl Read) -> Result<String, CliError> {
    if let Some(message) = message {
        return Ok(message);
    }
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).map_err(|source| CliError::Io {
        path: PathBuf::from("<stdin>"),
        source,
    })?;
    Ok(decode_message(&bytes)?.to_string())
}

pub fn translate_cmd(
    phony: &Phony,
    direction: Direction,
    message: &str,
    options: &TranslateOptions,
) -> Result<String, CliError> {
    match direction {
        Direction::To => Ok(phony.translate_to(message, options)),
        Direction::From => Ok(phony.translate_from(message, options)?),
    }
}
