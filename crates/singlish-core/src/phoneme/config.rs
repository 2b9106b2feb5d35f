use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::rule::{Context, GraphemeClass, MappingRule, RuleSet};
use crate::unicode::AL_LAKUNA;

pub(super) const DEFAULT_TOML: &str = include_str!("default_mapping.toml");

#[derive(Deserialize)]
struct MappingConfig {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, VowelForms>,
    #[serde(default)]
    signs: BTreeMap<String, String>,
    #[serde(default)]
    conjuncts: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct VowelForms {
    letter: String,
    #[serde(default)]
    sign: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("key defined in more than one section: {0}")]
    DuplicateKey(String),
    #[error("conjunct {0} is not a consonant")]
    UnknownConjunct(String),
}

/// Parse mapping TOML and compile it into context rules.
///
/// Per consonant, in selection order: conjunct forms after a consonant (if
/// listed in `[conjuncts]`), the bare letter before a vowel, then the letter
/// with al-lakuna. Per vowel: the sign after a consonant, then the letter.
pub fn parse_mapping_toml(toml_str: &str) -> Result<RuleSet, MappingConfigError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(MappingConfigError::Empty("consonants"));
    }
    if config.vowels.is_empty() {
        return Err(MappingConfigError::Empty("vowels"));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let keys = config
        .consonants
        .keys()
        .chain(config.vowels.keys())
        .chain(config.signs.keys());
    for key in keys {
        if key.is_empty() || !key.is_ascii() {
            return Err(MappingConfigError::NonAsciiKey(key.clone()));
        }
        if !seen.insert(key) {
            return Err(MappingConfigError::DuplicateKey(key.clone()));
        }
    }
    for (key, value) in config.consonants.iter().chain(&config.signs) {
        if value.is_empty() {
            return Err(MappingConfigError::EmptyValue(key.clone()));
        }
    }
    for (key, forms) in &config.vowels {
        if forms.letter.is_empty() {
            return Err(MappingConfigError::EmptyValue(key.clone()));
        }
    }
    for key in config.conjuncts.keys() {
        if !config.consonants.contains_key(key) {
            return Err(MappingConfigError::UnknownConjunct(key.clone()));
        }
    }

    let mut rules = Vec::new();

    for (source, base) in &config.consonants {
        let with_lakuna = format!("{base}{AL_LAKUNA}");
        if let Some(joiner) = config.conjuncts.get(source) {
            let joined = format!("{joiner}{base}");
            rules.push(consonant(source, joined, Some(Context::Vowel), true));
            let joined_lakuna = format!("{joiner}{with_lakuna}");
            rules.push(consonant(source, joined_lakuna, None, true));
        }
        rules.push(consonant(source, base.clone(), Some(Context::Vowel), false));
        rules.push(consonant(source, with_lakuna, None, false));
    }

    for (source, forms) in &config.vowels {
        rules.push(MappingRule {
            source: source.clone(),
            target: forms.sign.clone(),
            class: GraphemeClass::Vowel,
            context_before: Some(Context::Consonant),
            context_after: None,
        });
        rules.push(MappingRule {
            source: source.clone(),
            target: forms.letter.clone(),
            class: GraphemeClass::Vowel,
            context_before: None,
            context_after: None,
        });
    }

    for (source, target) in &config.signs {
        rules.push(MappingRule {
            source: source.clone(),
            target: target.clone(),
            class: GraphemeClass::Sign,
            context_before: None,
            context_after: None,
        });
    }

    Ok(RuleSet::from_rules(rules))
}

fn consonant(source: &str, target: String, after: Option<Context>, joined: bool) -> MappingRule {
    MappingRule {
        source: source.to_string(),
        target,
        class: GraphemeClass::Consonant,
        context_before: joined.then_some(Context::Consonant),
        context_after: after,
    }
}
