//! Subscriber setup for hosts that want engine traces.
//!
//! A no-op unless the `trace` feature is enabled. Only the first call in a
//! process installs a subscriber.

use std::path::Path;

/// Where trace events go.
#[derive(Debug, Clone, Copy)]
pub enum TraceOutput<'a> {
    /// Human-readable lines on stderr, `warn` and above unless `RUST_LOG` says otherwise.
    Stderr,
    /// JSON lines in `<dir>/phony-trace.jsonl`, engine debug events by default.
    JsonFile(&'a Path),
}

#[cfg(feature = "trace")]
pub const TRACE_FILE_NAME: &str = "phony-trace.jsonl";

#[cfg(feature = "trace")]
pub fn init_tracing(output: TraceOutput<'_>) {
    use std::sync::Once;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = |default: &str| {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
        };
        let installed = match output {
            TraceOutput::Stderr => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter("warn"))
                .try_init(),
            TraceOutput::JsonFile(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // flushes for the life of the process

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter("phony=debug,phony_core=debug"))
                    .try_init()
            }
        };
        if let Err(e) = installed {
            eprintln!("tracing not installed: {e}");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_output: TraceOutput<'_>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(TraceOutput::JsonFile(dir.path()));
        init_tracing(TraceOutput::Stderr);
        tracing::debug!("after init");
    }
}
