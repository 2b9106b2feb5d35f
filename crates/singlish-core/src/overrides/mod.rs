//! Lexical override table: whole-word and phrase renderings that bypass
//! the phoneme mapper.
//!
//! Lookup is case-insensitive and longest-pattern-wins. A pattern may span
//! several whitespace-separated words.

mod config;

use std::collections::HashMap;

use tracing::debug;

use crate::classifier::letter_run_len;

pub use config::{parse_overrides_toml, OverrideConfigError};

/// Returns the embedded default override TOML content.
pub fn default_toml() -> &'static str {
    config::DEFAULT_TOML
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    /// Lowercased romanized key, words joined by one space.
    pub pattern: String,
    pub rendering: String,
}

impl OverrideEntry {
    fn words(&self) -> impl Iterator<Item = &str> {
        self.pattern.split(' ')
    }

    fn word_count(&self) -> usize {
        self.words().count()
    }
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideMatch {
    /// Bytes of the remaining input covered by the match.
    pub consumed: usize,
    /// Rendering with the input's own whitespace runs between words.
    pub rendering: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    /// First pattern word → entries, longest pattern first.
    by_first_word: HashMap<String, Vec<OverrideEntry>>,
    len: usize,
}

impl OverrideTable {
    pub fn load_default() -> Result<Self, OverrideConfigError> {
        Self::from_toml(config::DEFAULT_TOML)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, OverrideConfigError> {
        Ok(Self::from_entries(parse_overrides_toml(toml_str)?))
    }

    /// Build from `(pattern, rendering)` pairs. Patterns are expected to be
    /// normalized already, and multi-word renderings to have one part per
    /// word (see [`parse_overrides_toml`]).
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut by_first_word: HashMap<String, Vec<OverrideEntry>> = HashMap::new();
        let mut len = 0;
        for (pattern, rendering) in entries {
            let Some(first) = pattern.split(' ').next() else {
                continue;
            };
            by_first_word
                .entry(first.to_string())
                .or_default()
                .push(OverrideEntry {
                    pattern: pattern.clone(),
                    rendering,
                });
            len += 1;
        }
        for entries in by_first_word.values_mut() {
            entries.sort_by(|a, b| {
                b.word_count()
                    .cmp(&a.word_count())
                    .then(b.pattern.len().cmp(&a.pattern.len()))
                    .then(a.pattern.cmp(&b.pattern))
            });
        }
        Self { by_first_word, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = &OverrideEntry> {
        self.by_first_word.values().flatten()
    }

    /// Match the longest pattern at the start of `remaining`.
    ///
    /// `remaining` must begin at a word. The match ends at a word boundary;
    /// any non-empty whitespace run in the input matches one pattern space.
    pub fn lookup(&self, remaining: &str) -> Option<OverrideMatch> {
        let first_len = letter_run_len(remaining);
        if first_len == 0 {
            return None;
        }
        let first = remaining[..first_len].to_ascii_lowercase();
        let candidates = self.by_first_word.get(&first)?;

        for entry in candidates {
            if let Some(m) = match_entry(entry, remaining, first_len) {
                debug!(pattern = %entry.pattern, consumed = m.consumed, "override hit");
                return Some(m);
            }
        }
        None
    }
}

fn match_entry(entry: &OverrideEntry, remaining: &str, first_len: usize) -> Option<OverrideMatch> {
    let mut pos = first_len;
    let mut gaps: Vec<&str> = Vec::new();

    for word in entry.words().skip(1) {
        let ws_len = remaining[pos..]
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace())
            .map_or(remaining.len() - pos, |(i, _)| i);
        if ws_len == 0 {
            return None;
        }
        let word_start = pos + ws_len;
        let word_len = letter_run_len(&remaining[word_start..]);
        if word_len == 0 || !remaining[word_start..word_start + word_len].eq_ignore_ascii_case(word)
        {
            return None;
        }
        gaps.push(&remaining[pos..word_start]);
        pos = word_start + word_len;
    }

    Some(OverrideMatch {
        consumed: pos,
        rendering: render_with_gaps(&entry.rendering, &gaps),
        pattern: entry.pattern.clone(),
    })
}

/// Re-insert the input's whitespace runs between rendered words. Parsed
/// tables always line up; an unchecked `from_entries` rendering that does not
/// is kept as configured.
fn render_with_gaps(rendering: &str, gaps: &[&str]) -> String {
    let parts: Vec<&str> = rendering.split(' ').collect();
    if gaps.is_empty() || parts.len() != gaps.len() + 1 {
        return rendering.to_string();
    }
    let mut out = String::with_capacity(rendering.len());
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(gaps[i - 1]);
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> OverrideTable {
        OverrideTable::from_entries(vec![
            ("sri lanka".to_string(), "ශ්\u{200D}රී ලංකා".to_string()),
            ("sri lankava".to_string(), "ශ්\u{200D}රී ලංකාව".to_string()),
            ("lankava".to_string(), "ලංකාව".to_string()),
            ("bn".to_string(), "බන්".to_string()),
        ])
    }

    #[test]
    fn test_single_word() {
        let m = table().lookup("bn yamu").unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(m.rendering, "බන්");
    }

    #[test]
    fn test_longest_pattern_wins() {
        let m = table().lookup("sri lankava lassanai").unwrap();
        assert_eq!(m.pattern, "sri lankava");
        assert_eq!(m.consumed, "sri lankava".len());
        assert_eq!(m.rendering, "ශ්\u{200D}රී ලංකාව");
    }

    #[test]
    fn test_shorter_pattern_when_longer_fails() {
        let m = table().lookup("sri lanka.").unwrap();
        assert_eq!(m.pattern, "sri lanka");
        assert_eq!(m.consumed, "sri lanka".len());
    }

    #[test]
    fn test_case_insensitive() {
        let m = table().lookup("Sri Lankava").unwrap();
        assert_eq!(m.pattern, "sri lankava");
    }

    #[test]
    fn test_whitespace_run_kept() {
        let m = table().lookup("sri    lankava").unwrap();
        assert_eq!(m.consumed, "sri    lankava".len());
        assert_eq!(m.rendering, "ශ්\u{200D}රී    ලංකාව");
    }

    #[test]
    fn test_requires_word_boundary() {
        assert!(table().lookup("bnn").is_none());
        assert!(table().lookup("lankavata").is_none());
        assert!(table().lookup("sri").is_none());
    }

    #[test]
    fn test_no_match_for_non_word() {
        assert!(table().lookup("  bn").is_none());
        assert!(table().lookup("").is_none());
    }

    #[test]
    fn test_default_table() {
        let t = OverrideTable::load_default().unwrap();
        assert_eq!(t.lookup("sinhala").unwrap().rendering, "සිංහල");
        assert_eq!(
            t.lookup("bohoma sthuthiyi").unwrap().rendering,
            "බොහොම ස්තූතියි"
        );
        assert_eq!(t.entries().count(), t.len());
    }

    #[test]
    fn test_render_with_gaps_mismatched_counts() {
        assert_eq!(
            render_with_gaps("ශ්\u{200D}රී ලංකාව", &["\t"]),
            "ශ්\u{200D}රී\tලංකාව"
        );
        assert_eq!(render_with_gaps("ලංකාව", &[" "]), "ලංකාව");
    }
}
