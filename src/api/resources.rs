use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use singlish_core::{Tables, TablesBuilder};
use tracing::{debug, info};

use super::EngineError;

pub const MAPPING_FILE: &str = "mapping.toml";
pub const OVERRIDES_FILE: &str = "overrides.toml";
pub const LEXICON_FILE: &str = "lexicon.toml";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Read `dir/name`, or `None` when the file does not exist.
pub(crate) fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, EngineError> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "custom table found");
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EngineError::Io {
            msg: format!("{}: {e}", path.display()),
        }),
    }
}

/// Build tables from a directory of TOML files. Missing files fall back to
/// the embedded defaults.
pub fn load_tables_from_dir(dir: &Path) -> Result<Tables, EngineError> {
    if !dir.is_dir() {
        return Err(EngineError::Io {
            msg: format!("{}: not a directory", dir.display()),
        });
    }

    let mut builder = TablesBuilder::new();
    if let Some(toml) = read_optional(dir, MAPPING_FILE)? {
        builder = builder.mapping_toml(toml);
    }
    if let Some(toml) = read_optional(dir, OVERRIDES_FILE)? {
        builder = builder.overrides_toml(toml);
    }
    if let Some(toml) = read_optional(dir, LEXICON_FILE)? {
        builder = builder.lexicon_toml(toml);
    }
    if let Some(toml) = read_optional(dir, SETTINGS_FILE)? {
        builder = builder.settings_toml(toml);
    }

    let tables = builder.build()?;
    info!(dir = %dir.display(), "tables loaded from directory");
    Ok(tables)
}
