use std::collections::BTreeMap;

use serde::Deserialize;

pub(super) const DEFAULT_TOML: &str = include_str!("default_overrides.toml");

#[derive(Deserialize)]
struct OverrideConfig {
    overrides: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OverrideConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[overrides] table is empty")]
    Empty,
    #[error("invalid key (ASCII letters and spaces only): {0:?}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("duplicate key after case folding: {0}")]
    DuplicateKey(String),
    #[error("{key:?} has {words} words but its value has {parts} space-separated parts")]
    PartCountMismatch {
        key: String,
        words: usize,
        parts: usize,
    },
}

/// Parse TOML text into `(normalized pattern, rendering)` pairs.
///
/// Patterns are lowercased and their words joined by a single space. A
/// multi-word pattern needs one value part per word, so the input's
/// whitespace can be put back between them.
pub fn parse_overrides_toml(toml_str: &str) -> Result<Vec<(String, String)>, OverrideConfigError> {
    let config: OverrideConfig =
        toml::from_str(toml_str).map_err(|e| OverrideConfigError::Parse(e.to_string()))?;

    if config.overrides.is_empty() {
        return Err(OverrideConfigError::Empty);
    }

    let mut normalized: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in config.overrides {
        if !key.bytes().all(|b| b.is_ascii_alphabetic() || b == b' ')
            || key.trim().is_empty()
        {
            return Err(OverrideConfigError::InvalidKey(key));
        }
        if value.trim().is_empty() {
            return Err(OverrideConfigError::EmptyValue(key));
        }
        let pattern = key
            .split_ascii_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let words = pattern.split(' ').count();
        let parts = value.split(' ').count();
        if words > 1 && parts != words {
            return Err(OverrideConfigError::PartCountMismatch { key, words, parts });
        }
        if normalized.insert(pattern.clone(), value).is_some() {
            return Err(OverrideConfigError::DuplicateKey(pattern));
        }
    }

    Ok(normalized.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[overrides]
"Sri  Lankava" = "ශ්‍රී ලංකාව"
bn = "බන්"
"#;
        let entries = parse_overrides_toml(toml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "bn");
        assert_eq!(entries[1].0, "sri lankava");
    }

    #[test]
    fn parse_default_toml() {
        let entries = parse_overrides_toml(DEFAULT_TOML).unwrap();
        assert!(entries.len() >= 20, "expected 20+ overrides, got {}", entries.len());
    }

    #[test]
    fn error_empty() {
        let err = parse_overrides_toml("[overrides]\n").unwrap_err();
        assert!(matches!(err, OverrideConfigError::Empty));
    }

    #[test]
    fn error_invalid_key() {
        let err = parse_overrides_toml("[overrides]\n\"eka-eka\" = \"එක\"\n").unwrap_err();
        assert!(matches!(err, OverrideConfigError::InvalidKey(_)));
        let err = parse_overrides_toml("[overrides]\n\"මම\" = \"මම\"\n").unwrap_err();
        assert!(matches!(err, OverrideConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let err = parse_overrides_toml("[overrides]\nbn = \" \"\n").unwrap_err();
        assert!(matches!(err, OverrideConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_duplicate_after_folding() {
        let toml = r#"
[overrides]
Bn = "බන්"
bn = "බන්"
"#;
        let err = parse_overrides_toml(toml).unwrap_err();
        assert!(matches!(err, OverrideConfigError::DuplicateKey(_)));
    }

    #[test]
    fn error_part_count_mismatch() {
        let toml = r#"
[overrides]
"sri lankava" = "ශ්‍රීලංකාව"
"#;
        match parse_overrides_toml(toml).unwrap_err() {
            OverrideConfigError::PartCountMismatch { words, parts, .. } => {
                assert_eq!((words, parts), (2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }

        // A doubled space in the value is an extra empty part.
        let toml = "[overrides]\n\"bohoma  sthuthiyi\" = \"බොහොම  ස්තූතියි\"\n";
        match parse_overrides_toml(toml).unwrap_err() {
            OverrideConfigError::PartCountMismatch { words, parts, .. } => {
                assert_eq!((words, parts), (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn single_word_value_may_have_spaces() {
        let entries = parse_overrides_toml("[overrides]\nthx = \"බොහොම ස්තූතියි\"\n").unwrap();
        assert_eq!(entries[0].1, "බොහොම ස්තූතියි");
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_overrides_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, OverrideConfigError::Parse(_)));
    }
}
