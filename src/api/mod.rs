//! Embedding layer: a lock-guarded engine handle and config loaders.

mod engine;
mod types;

pub use engine::SharedPhony;
pub use types::PhonyError;

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    phony_core::VERSION.to_string()
}

/// Install a settings file as the process-wide defaults for new engines.
/// Must run before the first `Phony::new()`.
pub fn settings_load_config(path: &Path) -> Result<(), PhonyError> {
    let content = std::fs::read_to_string(path).map_err(|e| PhonyError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    phony_core::settings::init_custom(content)
        .map_err(|e| PhonyError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

pub fn alphabets_default_config() -> String {
    phony_core::alphabet::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    phony_core::settings::default_toml().to_string()
}

/// Write JSON trace events under `log_dir` (needs the `trace` feature).
pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(crate::trace_init::TraceOutput::JsonFile(log_dir));
}
