//! Public engine API: the shared [`SinglishEngine`] handle and table loading.

mod engine;
mod resources;
mod types;

pub use engine::SinglishEngine;
pub use resources::{
    load_tables_from_dir, LEXICON_FILE, MAPPING_FILE, OVERRIDES_FILE, SETTINGS_FILE,
};
pub use types::EngineError;

/// Engine version string.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
