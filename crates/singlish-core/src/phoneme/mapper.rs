use serde::Serialize;
use tracing::debug;

use super::rule::{Context, GraphemeClass, RuleGroup, RuleSet};

/// One segmented piece of a romanized word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Source text as written.
    pub source: String,
    /// Rule key the source matched (after case folding). Empty when unmapped.
    pub grapheme: String,
    /// `None` for characters no rule covers.
    pub class: Option<GraphemeClass>,
    /// Rendered target, filled by [`PhonemeMapper::render`].
    pub target: String,
}

impl Unit {
    pub fn is_mapped(&self) -> bool {
        self.class.is_some()
    }

    fn context(&self) -> Context {
        self.class.map_or(Context::Other, Context::from)
    }
}

/// Longest-match, context-sensitive romanized → Sinhala word mapper.
pub struct PhonemeMapper<'a> {
    rules: &'a RuleSet,
    fold_initial_capital: bool,
}

impl<'a> PhonemeMapper<'a> {
    pub fn new(rules: &'a RuleSet, fold_initial_capital: bool) -> Self {
        Self {
            rules,
            fold_initial_capital,
        }
    }

    /// Render one word. Unmapped characters are copied through.
    pub fn map(&self, word: &str) -> String {
        self.render(self.segment(word))
            .iter()
            .map(|u| u.target.as_str())
            .collect()
    }

    /// Split `word` into units by longest source match.
    ///
    /// At each length the exact-case key is tried before the lowercased one,
    /// so `Sh` finds ෂ while `Ma` still finds `m`.
    pub fn segment(&self, word: &str) -> Vec<Unit> {
        let mut folded = word.to_string();
        if self.fold_initial_capital {
            if let Some(first) = folded.get_mut(..1) {
                first.make_ascii_lowercase();
            }
        }

        let mut units = Vec::new();
        let mut pos = 0;
        while pos < folded.len() {
            let unit = match self.longest_match(&folded[pos..]) {
                Match::Hit { len, key, group } => {
                    let unit = Unit {
                        source: word[pos..pos + len].to_string(),
                        grapheme: key,
                        class: Some(group.class),
                        target: String::new(),
                    };
                    pos += len;
                    unit
                }
                Match::Miss { len } => {
                    let source = word[pos..pos + len].to_string();
                    debug!(grapheme = %source, "unmapped grapheme, passing through");
                    pos += len;
                    Unit {
                        source,
                        grapheme: String::new(),
                        class: None,
                        target: String::new(),
                    }
                }
            };
            units.push(unit);
        }
        units
    }

    /// Choose each unit's target from its neighbours' classes.
    /// Word edges count as [`Context::Other`].
    pub fn render(&self, mut units: Vec<Unit>) -> Vec<Unit> {
        let contexts: Vec<Context> = units.iter().map(Unit::context).collect();

        for (i, unit) in units.iter_mut().enumerate() {
            let before = if i == 0 { Context::Other } else { contexts[i - 1] };
            let after = contexts.get(i + 1).copied().unwrap_or(Context::Other);

            let rule = self
                .rules
                .get(&unit.grapheme)
                .and_then(|g| g.select(before, after));
            unit.target = match rule {
                Some(r) => r.target.clone(),
                None => unit.source.clone(),
            };
        }
        units
    }

    fn longest_match(&self, rest: &str) -> Match<'a> {
        let max = self.rules.max_source_len().min(rest.len());
        for len in (1..=max).rev() {
            if !rest.is_char_boundary(len) {
                continue;
            }
            let candidate = &rest[..len];
            if let Some(group) = self.rules.get(candidate) {
                return Match::Hit {
                    len,
                    key: candidate.to_string(),
                    group,
                };
            }
            if candidate.bytes().any(|b| b.is_ascii_uppercase()) {
                let lower = candidate.to_ascii_lowercase();
                if let Some(group) = self.rules.get(&lower) {
                    return Match::Hit {
                        len,
                        key: lower,
                        group,
                    };
                }
            }
        }
        Match::Miss {
            len: rest.chars().next().map_or(1, char::len_utf8),
        }
    }
}

enum Match<'a> {
    Hit {
        len: usize,
        key: String,
        group: &'a RuleGroup,
    },
    Miss {
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::parse_mapping_toml;

    fn rules() -> RuleSet {
        parse_mapping_toml(crate::phoneme::default_toml()).unwrap()
    }

    fn map(word: &str) -> String {
        let rules = rules();
        PhonemeMapper::new(&rules, true).map(word)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(map("mama"), "\u{0DB8}\u{0DB8}");
        assert_eq!(map("ekak"), "\u{0D91}\u{0D9A}\u{0D9A}\u{0DCA}");
        assert_eq!(map("veadata"), "\u{0DC0}\u{0DD0}\u{0DA9}\u{0DA7}");
    }

    #[test]
    fn test_vowel_sign_and_letter() {
        // ඕනෙ
        assert_eq!(map("oone"), "\u{0D95}\u{0DB1}\u{0DD9}");
        // කොලඔ: a vowel after a vowel stays independent
        assert_eq!(map("kolao"), "\u{0D9A}\u{0DDC}\u{0DBD}\u{0D94}");
    }

    #[test]
    fn test_rakaransaya() {
        // රත්‍රියක්
        assert_eq!(
            map("rathriyak"),
            "\u{0DBB}\u{0DAD}\u{0DCA}\u{200D}\u{0DBB}\u{0DD2}\u{0DBA}\u{0D9A}\u{0DCA}"
        );
    }

    #[test]
    fn test_case_significant_inside_word() {
        // යුෂ්මතා
        assert_eq!(
            map("yuShmathaa"),
            "\u{0DBA}\u{0DD4}\u{0DC2}\u{0DCA}\u{0DB8}\u{0DAD}\u{0DCF}"
        );
        assert_ne!(map("yuShmathaa"), map("yushmathaa"));
    }

    #[test]
    fn test_initial_capital_folded() {
        assert_eq!(map("Epaa"), map("epaa"));
        assert_eq!(map("Epaa"), "\u{0D91}\u{0DB4}\u{0DCF}");
    }

    #[test]
    fn test_initial_capital_kept_when_disabled() {
        let rules = rules();
        let mapper = PhonemeMapper::new(&rules, false);
        // N is retroflex ණ when case is kept
        assert_eq!(mapper.map("Na"), "\u{0DAB}");
        assert_eq!(PhonemeMapper::new(&rules, true).map("Na"), "\u{0DB1}");
    }

    #[test]
    fn test_unmapped_passes_through() {
        let rules = rules();
        let mapper = PhonemeMapper::new(&rules, true);
        let units = mapper.segment("qa");
        assert_eq!(units.len(), 2);
        assert!(!units[0].is_mapped());
        assert_eq!(mapper.map("qa"), "q\u{0D85}");
    }

    #[test]
    fn test_segment_longest_match() {
        let rules = rules();
        let mapper = PhonemeMapper::new(&rules, true);
        let units = mapper.segment("yuShmathaa");
        let graphemes: Vec<&str> = units.iter().map(|u| u.grapheme.as_str()).collect();
        assert_eq!(graphemes, ["y", "u", "Sh", "m", "a", "th", "aa"]);
        let sources: String = units.iter().map(|u| u.source.as_str()).collect();
        assert_eq!(sources, "yuShmathaa");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(map(""), "");
    }
}
