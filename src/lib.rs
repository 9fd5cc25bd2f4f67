//! Phonetic alphabet translation.
//!
//! Re-exports the [`phony_core`] engine and adds [`api::SharedPhony`], a
//! thread-safe handle for engines that are mutated while other threads
//! translate.

pub mod api;
pub mod trace_init;

pub use api::{PhonyError, SharedPhony};
pub use phony_core::{
    alphabet, decode_message, options, settings, title_case, Alphabet, AlphabetConfigError,
    AlphabetRegistry, Options, Phony, TranslateError, TranslateOptions, VERSION,
};
