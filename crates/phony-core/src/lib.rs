//! Translate text to and from spoken phonetic alphabets.
//!
//! ```
//! use phony_core::{Phony, TranslateOptions};
//!
//! let phony = Phony::builtin();
//! let spoken = phony.translate_to("sos", &TranslateOptions::new());
//! assert_eq!(spoken, "Sierra Oscar Sierra");
//! assert_eq!(phony.translate_from(&spoken, &TranslateOptions::new()).unwrap(), "SOS");
//! ```

pub mod alphabet;
mod error;
pub mod options;
pub mod settings;
mod text;
pub mod translate;

pub use alphabet::{Alphabet, AlphabetConfigError, AlphabetRegistry};
pub use error::{decode_message, TranslateError};
pub use options::{Options, TranslateOptions};
pub use text::title_case;
pub use translate::Phony;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
