use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::thread;

use singlish_core::lexicon::parse_lexicon_toml;
use singlish_core::overrides::OverrideTable;
use singlish_core::phoneme::parse_mapping_toml;
use singlish_core::settings::parse_settings_toml;
use singlish_core::{Tables, TablesError, TranslationResult, Translator};
use tracing::{debug_span, info};

use super::resources::load_tables_from_dir;
use super::EngineError;

/// Shared transliteration handle.
///
/// Holds the current table snapshot behind `RwLock<Arc<_>>`. A translation
/// clones the `Arc` under a short read lock and runs without it, so a reload
/// never blocks on in-flight work and never exposes a half-built table.
pub struct SinglishEngine {
    tables: RwLock<Arc<Tables>>,
    /// Serializes reloads so two partial reloads cannot drop each other's edits.
    reload: Mutex<()>,
}

impl SinglishEngine {
    /// Engine over the embedded default tables.
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self::with_tables(Tables::load_default()?))
    }

    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(Arc::new(tables)),
            reload: Mutex::new(()),
        }
    }

    /// Engine over the tables in `dir` (see [`load_tables_from_dir`]).
    pub fn from_dir(dir: &Path) -> Result<Self, EngineError> {
        Ok(Self::with_tables(load_tables_from_dir(dir)?))
    }

    /// Current snapshot. Later reloads do not affect the returned value.
    pub fn tables(&self) -> Arc<Tables> {
        // The guarded value is a pointer that is only ever replaced whole,
        // so a poisoned lock still holds a consistent snapshot.
        let guard = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.tables())
    }

    pub fn translate(&self, input: &str) -> TranslationResult {
        self.translator().translate(input)
    }

    /// Output text only.
    pub fn translate_text(&self, input: &str) -> String {
        self.translate(input).output
    }

    pub fn translate_bytes(&self, input: &[u8]) -> Result<TranslationResult, EngineError> {
        Ok(self.translator().translate_bytes(input)?)
    }

    /// Translate `inputs` on up to `workers` threads sharing one snapshot.
    /// Results are in input order.
    pub fn translate_batch<S>(
        &self,
        inputs: &[S],
        workers: usize,
    ) -> Result<Vec<TranslationResult>, EngineError>
    where
        S: AsRef<str> + Sync,
    {
        let _span = debug_span!("translate_batch", inputs = inputs.len(), workers).entered();

        let translator = self.translator();
        let workers = workers.clamp(1, inputs.len().max(1));
        if workers == 1 {
            return Ok(inputs
                .iter()
                .map(|s| translator.translate(s.as_ref()))
                .collect());
        }

        let chunk_size = inputs.len().div_ceil(workers);
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for (i, chunk) in inputs.chunks(chunk_size).enumerate() {
                let translator = translator.clone();
                let handle = thread::Builder::new()
                    .name(format!("singlish-batch-{i}"))
                    .spawn_scoped(scope, move || {
                        chunk
                            .iter()
                            .map(|s| translator.translate(s.as_ref()))
                            .collect::<Vec<_>>()
                    })
                    .map_err(|e| EngineError::Io {
                        msg: format!("spawn batch worker: {e}"),
                    })?;
                handles.push(handle);
            }

            let mut results = Vec::with_capacity(inputs.len());
            for handle in handles {
                let chunk = handle.join().map_err(|_| EngineError::Internal {
                    msg: "batch worker panicked".to_string(),
                })?;
                results.extend(chunk);
            }
            Ok(results)
        })
    }

    /// Replace every table from the files in `dir`; missing files use the
    /// embedded defaults.
    pub fn reload_from_dir(&self, dir: &Path) -> Result<(), EngineError> {
        let _reload = self.reload.lock().unwrap_or_else(PoisonError::into_inner);
        let tables = load_tables_from_dir(dir)?;
        self.swap(tables);
        Ok(())
    }

    pub fn reload_overrides(&self, toml: &str) -> Result<(), EngineError> {
        self.reload_with(|t| {
            t.overrides = OverrideTable::from_toml(toml)?;
            Ok(())
        })
    }

    pub fn reload_mapping(&self, toml: &str) -> Result<(), EngineError> {
        self.reload_with(|t| {
            t.rules = parse_mapping_toml(toml)?;
            Ok(())
        })
    }

    pub fn reload_lexicon(&self, toml: &str) -> Result<(), EngineError> {
        self.reload_with(|t| {
            t.lexicon = parse_lexicon_toml(toml)?;
            Ok(())
        })
    }

    pub fn reload_settings(&self, toml: &str) -> Result<(), EngineError> {
        self.reload_with(|t| {
            t.settings = parse_settings_toml(toml)?;
            Ok(())
        })
    }

    /// Copy the current snapshot, apply `edit`, and publish the result.
    /// On error the current snapshot stays in place.
    fn reload_with<F>(&self, edit: F) -> Result<(), EngineError>
    where
        F: FnOnce(&mut Tables) -> Result<(), TablesError>,
    {
        let _reload = self.reload.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = Tables::clone(&self.tables());
        edit(&mut next)?;
        self.swap(next);
        Ok(())
    }

    fn swap(&self, tables: Tables) {
        let mut guard = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(tables);
        info!(
            graphemes = guard.rules.len(),
            overrides = guard.overrides.len(),
            "tables swapped"
        );
    }
}
