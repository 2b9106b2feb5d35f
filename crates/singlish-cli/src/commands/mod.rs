//! Subcommand implementations for `singlishtool`.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod accuracy;
pub mod config_ops;
pub mod snapshot;
pub mod translate_ops;

use std::path::Path;

use singlish_engine::SinglishEngine;

/// Engine over `--tables DIR` when given, otherwise the embedded defaults.
pub fn open_engine(tables: Option<&str>) -> SinglishEngine {
    match tables {
        Some(dir) => die!(
            SinglishEngine::from_dir(Path::new(dir)),
            "Failed to load tables from {dir}: {}"
        ),
        None => die!(SinglishEngine::new(), "Failed to load default tables: {}"),
    }
}
