//! Named phonetic alphabets and fallback-aware lookup.
//!
//! An [`Alphabet`] maps single characters to phonetic words and may name a
//! fallback alphabet that is consulted on a miss. [`AlphabetRegistry`] owns
//! the tables by (lowercase) name and resolves lookups in both directions by
//! walking the fallback chain.

mod config;

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use tracing::warn;

pub use config::{default_toml, parse_alphabets_toml, AlphabetConfigError};
pub(crate) use config::{build_registry, AlphabetEntry};

/// A character → phonetic table with an optional fallback alphabet name.
///
/// Characters iterate in code-point order. When two characters share a
/// phonetic word, reverse lookup returns the lowest character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    characters: BTreeMap<char, String>,
    fallback: Option<String>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty alphabet that defers every lookup to `fallback`.
    pub fn with_fallback(fallback: &str) -> Self {
        Self {
            characters: BTreeMap::new(),
            fallback: Some(normalize_name(fallback).into_owned()),
        }
    }

    /// Builder-style insert, for literal tables.
    pub fn character(mut self, character: char, phonetic: impl Into<String>) -> Self {
        self.insert(character, phonetic);
        self
    }

    /// Insert or overwrite a mapping, returning the previous phonetic.
    pub fn insert(&mut self, character: char, phonetic: impl Into<String>) -> Option<String> {
        self.characters.insert(character, phonetic.into())
    }

    pub fn remove(&mut self, character: char) -> Option<String> {
        self.characters.remove(&character)
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    pub fn set_fallback(&mut self, fallback: Option<&str>) {
        self.fallback = fallback.map(|f| normalize_name(f).into_owned());
    }

    /// Phonetic for `character` in this table only (no fallback).
    pub fn phonetic(&self, character: char) -> Option<&str> {
        self.characters.get(&character).map(String::as_str)
    }

    /// Character for `phonetic` in this table only (no fallback).
    /// Comparison ignores case. An empty phonetic matches nothing.
    pub fn character_for(&self, phonetic: &str) -> Option<char> {
        if phonetic.is_empty() {
            return None;
        }
        self.characters
            .iter()
            .find(|(_, p)| phonetic_eq(p, phonetic))
            .map(|(&c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.characters.iter().map(|(&c, p)| (c, p.as_str()))
    }
}

fn phonetic_eq(stored: &str, query: &str) -> bool {
    if stored.is_ascii() && query.is_ascii() {
        stored.eq_ignore_ascii_case(query)
    } else {
        stored.to_lowercase() == query.to_lowercase()
    }
}

/// Alphabet names are case-insensitive; the registry keys them lowercase.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.is_ascii() {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(name.to_ascii_lowercase());
        }
        return Cow::Borrowed(name);
    }
    let lower = name.to_lowercase();
    if lower == name {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(lower)
    }
}

/// Named alphabets, keyed by lowercase name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetRegistry {
    alphabets: BTreeMap<String, Alphabet>,
}

impl AlphabetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded ITU, ANSI, FAA and ICAO tables.
    pub fn builtin() -> Self {
        // The embedded table is checked by build.rs and by the tests below.
        parse_alphabets_toml(default_toml()).expect("builtin alphabet TOML must be valid")
    }

    /// Register `alphabet` under `name`, replacing and returning any existing one.
    pub fn insert(&mut self, name: &str, alphabet: Alphabet) -> Option<Alphabet> {
        self.alphabets.insert(normalize_name(name).into_owned(), alphabet)
    }

    pub fn remove(&mut self, name: &str) -> Option<Alphabet> {
        self.alphabets.remove(normalize_name(name).as_ref())
    }

    pub fn get(&self, name: &str) -> Option<&Alphabet> {
        self.alphabets.get(normalize_name(name).as_ref())
    }

    /// Mutable access for extending or overriding an existing table in place.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Alphabet> {
        self.alphabets.get_mut(normalize_name(name).as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.alphabets.contains_key(normalize_name(name).as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.alphabets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Alphabet)> {
        self.alphabets.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }

    /// Merge `other` into this registry. Alphabets with the same name are
    /// replaced wholesale.
    pub fn extend(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
    }

    /// Names visited when resolving through `name`, in lookup order.
    ///
    /// Stops at the first missing alphabet or at the first repeated name.
    pub fn fallback_chain(&self, name: &str) -> Vec<&str> {
        self.chain(name).map(|(n, _)| n).collect()
    }

    /// Resolve `character` through `name` and its fallbacks.
    ///
    /// The key match is case-sensitive; callers normalize case first.
    pub fn resolve_to_phonetic(&self, name: &str, character: char) -> Option<&str> {
        self.chain(name).find_map(|(_, a)| a.phonetic(character))
    }

    /// Resolve `phonetic` back to its character through `name` and its fallbacks.
    pub fn resolve_to_character(&self, name: &str, phonetic: &str) -> Option<char> {
        self.chain(name).find_map(|(_, a)| a.character_for(phonetic))
    }

    fn chain<'a>(&'a self, name: &str) -> Chain<'a> {
        let start = self
            .alphabets
            .get_key_value(normalize_name(name).as_ref())
            .map(|(n, a)| (n.as_str(), a));
        Chain {
            registry: self,
            next: start,
            visited: HashSet::new(),
        }
    }
}

/// Iterator over an alphabet and its fallbacks.
struct Chain<'a> {
    registry: &'a AlphabetRegistry,
    next: Option<(&'a str, &'a Alphabet)>,
    visited: HashSet<&'a str>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (&'a str, &'a Alphabet);

    fn next(&mut self) -> Option<Self::Item> {
        let (name, alphabet) = self.next.take()?;
        if !self.visited.insert(name) {
            warn!(alphabet = name, "fallback cycle detected");
            return None;
        }
        let registry = self.registry;
        self.next = alphabet.fallback().and_then(|fallback| {
            registry
                .alphabets
                .get_key_value(normalize_name(fallback).as_ref())
                .map(|(n, a)| (n.as_str(), a))
        });
        Some((name, alphabet))
    }
}
