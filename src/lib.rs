//! Singlish → Sinhala transliteration engine.
//!
//! [`SinglishEngine`] owns a hot-swappable snapshot of the tables and is
//! safe to share across threads. The pipeline itself lives in
//! [`singlish_core`], re-exported here.

pub mod api;
pub mod trace_init;


pub use api::{engine_version, load_tables_from_dir, EngineError, SinglishEngine};
pub use singlish_core;
pub use singlish_core::{
    translate, Span, SpanKind, SpanMapping, Tables, TablesBuilder, TablesError, TranslateError,
    TranslationResult, Translator,
};
pub use trace_init::{init_tracing, TraceGuard};
