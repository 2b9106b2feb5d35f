use singlish_core::{TablesError, TranslateError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid tables: {0}")]
    Config(#[from] TablesError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
