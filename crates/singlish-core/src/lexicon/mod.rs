//! Foreign-word recognition for the classifier.
//!
//! A letter run is foreign when its shape says so (abbreviation, camel case)
//! or when it appears in the English, technical-term or proper-noun lists.
//! A separate list of common Singlish words feeds the pass-through guard.

mod config;

use std::collections::HashSet;

use serde::Serialize;

use crate::settings::ClassifierSettings;

pub use config::{parse_lexicon_toml, LexiconConfigError};

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    config::DEFAULT_TOML
}

/// Why a word was recognized as foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignReason {
    Abbreviation,
    CamelCase,
    English,
    Technical,
    ProperNoun,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    english: HashSet<String>,
    technical: HashSet<String>,
    proper_nouns: HashSet<String>,
    singlish: HashSet<String>,
}

impl Lexicon {
    pub fn load_default() -> Result<Self, LexiconConfigError> {
        parse_lexicon_toml(config::DEFAULT_TOML)
    }

    pub(crate) fn from_sets(
        english: HashSet<String>,
        technical: HashSet<String>,
        proper_nouns: HashSet<String>,
        singlish: HashSet<String>,
    ) -> Self {
        Self {
            english,
            technical,
            proper_nouns,
            singlish,
        }
    }

    /// Number of distinct foreign words across the foreign sections.
    pub fn len(&self) -> usize {
        self.english
            .iter()
            .chain(&self.technical)
            .chain(&self.proper_nouns)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn singlish_len(&self) -> usize {
        self.singlish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty() && self.technical.is_empty() && self.proper_nouns.is_empty()
    }

    /// Case-insensitive membership in any foreign list.
    pub fn contains(&self, word: &str) -> bool {
        self.listed(&word.to_ascii_lowercase()).is_some()
    }

    /// Classify a single ASCII letter run. Returns `None` for Singlish.
    pub fn recognize(&self, word: &str, settings: &ClassifierSettings) -> Option<ForeignReason> {
        if is_abbreviation(word, settings.abbreviation_min_len) {
            return Some(ForeignReason::Abbreviation);
        }
        if settings.camel_case_is_foreign && is_camel_case(word) {
            return Some(ForeignReason::CamelCase);
        }
        self.listed(&word.to_ascii_lowercase())
    }

    pub fn is_foreign(&self, word: &str, settings: &ClassifierSettings) -> bool {
        self.recognize(word, settings).is_some()
    }

    /// A known Singlish word, case-insensitive.
    pub fn is_singlish(&self, word: &str) -> bool {
        self.singlish.contains(&word.to_ascii_lowercase())
    }

    fn listed(&self, lower: &str) -> Option<ForeignReason> {
        if self.english.contains(lower) {
            Some(ForeignReason::English)
        } else if self.technical.contains(lower) {
            Some(ForeignReason::Technical)
        } else if self.proper_nouns.contains(lower) {
            Some(ForeignReason::ProperNoun)
        } else {
            None
        }
    }
}

fn is_abbreviation(word: &str, min_len: usize) -> bool {
    let letters = word.bytes().filter(u8::is_ascii_alphabetic).count();
    letters >= min_len && word.bytes().all(|b| !b.is_ascii_lowercase())
}

/// `WhatsApp`, `YouTube`: leading capital, a later capital, and some lowercase.
fn is_camel_case(word: &str) -> bool {
    let bytes = word.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_uppercase()
                && rest.iter().any(u8::is_ascii_uppercase)
                && rest.iter().any(u8::is_ascii_lowercase)
        }
        None => false,
    }
}
