//! Optional JSON-lines tracing for diagnostics runs.
//!
//! Only active with the `trace` feature; otherwise [`init_tracing`] does
//! nothing and returns an empty guard.

use std::path::Path;

use crate::api::EngineError;

/// Events file created inside the trace directory.
pub const TRACE_FILE: &str = "singlish-trace.jsonl";

/// Environment variable that overrides [`DEFAULT_FILTER`].
pub const TRACE_FILTER_ENV: &str = "SINGLISH_LOG";

pub const DEFAULT_FILTER: &str = "singlish_engine=debug,singlish_core=debug";

/// Keeps the background writer alive. Buffered events are flushed when it
/// is dropped, so hold it until the work being traced is done.
#[must_use = "trace events are lost once the guard is dropped"]
#[derive(Default)]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Write trace events to `log_dir/singlish-trace.jsonl`, creating the
/// directory if needed.
///
/// Installs the process-wide subscriber. When one is already installed the
/// call succeeds with an empty guard and the existing subscriber stays.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<TraceGuard, EngineError> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", log_dir.display()),
    })?;

    let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (writer, worker) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env(TRACE_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .is_ok();
    if !installed {
        return Ok(TraceGuard::default());
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %log_dir.display(),
        "tracing started"
    );
    Ok(TraceGuard {
        _worker: Some(worker),
    })
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Result<TraceGuard, EngineError> {
    Ok(TraceGuard::default())
}
