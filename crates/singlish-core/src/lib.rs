//! Romanized Sinhala ("Singlish") to Sinhala-script transliteration.
//!
//! The pipeline is classify → guard → override lookup → phoneme mapping →
//! normalize, driven by [`translator::Translator`] over an immutable
//! [`tables::Tables`] bundle.

pub mod classifier;
pub mod guard;
pub mod lexicon;
pub mod normalize;
pub mod overrides;
pub mod phoneme;
pub mod settings;
pub mod span;
pub mod tables;
pub mod translator;
pub mod unicode;

pub use span::{Span, SpanKind};
pub use tables::{Tables, TablesBuilder, TablesError};
pub use translator::{translate, SpanMapping, TranslateError, TranslationResult, Translator};
