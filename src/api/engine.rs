use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use phony_core::alphabet::parse_alphabets_toml;
use phony_core::{Alphabet, Phony, TranslateOptions};
use tracing::debug;

use super::PhonyError;

/// A [`Phony`] engine behind a read-write lock.
///
/// Translations take the read lock; registry and default changes take the
/// write lock, so a mutation is never observed half-applied. Clones share
/// the same engine.
#[derive(Clone, Default)]
pub struct SharedPhony {
    pub(crate) inner: Arc<RwLock<Phony>>,
}

impl SharedPhony {
    pub fn new(phony: Phony) -> Self {
        Self {
            inner: Arc::new(RwLock::new(phony)),
        }
    }

    pub fn translate_to(
        &self,
        message: &str,
        options: &TranslateOptions,
    ) -> Result<String, PhonyError> {
        Ok(self.read()?.translate_to(message, options))
    }

    pub fn translate_from(
        &self,
        message: &str,
        options: &TranslateOptions,
    ) -> Result<String, PhonyError> {
        Ok(self.read()?.translate_from(message, options)?)
    }

    /// Register or replace an alphabet, returning the one it replaced.
    pub fn register_alphabet(
        &self,
        name: &str,
        alphabet: Alphabet,
    ) -> Result<Option<Alphabet>, PhonyError> {
        Ok(self.write()?.alphabets_mut().insert(name, alphabet))
    }

    pub fn remove_alphabet(&self, name: &str) -> Result<Option<Alphabet>, PhonyError> {
        Ok(self.write()?.alphabets_mut().remove(name))
    }

    /// Merge the alphabets of a TOML file into the engine.
    pub fn load_alphabets(&self, path: &Path) -> Result<usize, PhonyError> {
        let content = std::fs::read_to_string(path).map_err(|e| PhonyError::Io {
            msg: format!("{}: {e}", path.display()),
        })?;
        let registry = parse_alphabets_toml(&content)
            .map_err(|e| PhonyError::InvalidData { msg: e.to_string() })?;
        let count = registry.len();
        debug!(count, path = %path.display(), "loading alphabets");
        self.write()?.alphabets_mut().extend(registry);
        Ok(count)
    }

    /// Run `f` with exclusive access, for changes that span several calls.
    pub fn update<R>(&self, f: impl FnOnce(&mut Phony) -> R) -> Result<R, PhonyError> {
        Ok(f(&mut *self.write()?))
    }

    /// A copy of the current engine state.
    pub fn snapshot(&self) -> Result<Phony, PhonyError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Phony>, PhonyError> {
        self.inner
            .read()
            .map_err(|e| PhonyError::Internal { msg: e.to_string() })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Phony>, PhonyError> {
        self.inner
            .write()
            .map_err(|e| PhonyError::Internal { msg: e.to_string() })
    }
}
