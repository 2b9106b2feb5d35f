use serde::Deserialize;

use super::Lexicon;

pub(super) const DEFAULT_TOML: &str = include_str!("default_lexicon.toml");

#[derive(Deserialize)]
struct LexiconConfig {
    #[serde(default)]
    english: WordList,
    #[serde(default)]
    technical: TermList,
    #[serde(default)]
    proper_nouns: NameList,
    #[serde(default)]
    singlish: WordList,
}

#[derive(Default, Deserialize)]
struct WordList {
    words: Vec<String>,
}

#[derive(Default, Deserialize)]
struct TermList {
    terms: Vec<String>,
}

#[derive(Default, Deserialize)]
struct NameList {
    names: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("lexicon has no entries")]
    Empty,
    #[error("invalid word in [{section}]: {word:?}")]
    InvalidWord { section: &'static str, word: String },
    #[error("{word:?} is listed both as foreign and as Singlish")]
    Conflict { word: String },
}

/// Parse lexicon TOML into a [`Lexicon`].
///
/// Words must be non-empty ASCII letters, optionally with inner apostrophes
/// (`don't`). They are stored lowercased. A `[singlish]` word may not also
/// appear in a foreign section.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconConfigError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconConfigError::Parse(e.to_string()))?;

    if config.english.words.is_empty()
        && config.technical.terms.is_empty()
        && config.proper_nouns.names.is_empty()
    {
        return Err(LexiconConfigError::Empty);
    }

    let english = collect("english", config.english.words)?;
    let technical = collect("technical", config.technical.terms)?;
    let proper_nouns = collect("proper_nouns", config.proper_nouns.names)?;
    let singlish = collect("singlish", config.singlish.words)?;

    let conflict = singlish
        .iter()
        .filter(|w| {
            english.contains(*w) || technical.contains(*w) || proper_nouns.contains(*w)
        })
        .min();
    if let Some(word) = conflict {
        return Err(LexiconConfigError::Conflict { word: word.clone() });
    }

    Ok(Lexicon::from_sets(
        english,
        technical,
        proper_nouns,
        singlish,
    ))
}

fn collect(
    section: &'static str,
    words: Vec<String>,
) -> Result<std::collections::HashSet<String>, LexiconConfigError> {
    words
        .into_iter()
        .map(|w| {
            if is_valid_word(&w) {
                Ok(w.to_ascii_lowercase())
            } else {
                Err(LexiconConfigError::InvalidWord { section, word: w })
            }
        })
        .collect()
}

fn is_valid_word(w: &str) -> bool {
    let bytes = w.as_bytes();
    !bytes.is_empty()
        && bytes[0].is_ascii_alphabetic()
        && bytes[bytes.len() - 1].is_ascii_alphabetic()
        && bytes.iter().all(|b| b.is_ascii_alphabetic() || *b == b'\'')
}
