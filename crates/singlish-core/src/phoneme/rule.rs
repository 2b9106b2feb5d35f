use std::collections::HashMap;

use serde::Serialize;

/// What kind of grapheme a rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphemeClass {
    Consonant,
    Vowel,
    Sign,
}

/// Class of a neighbouring unit as seen by a context predicate.
/// Word edges, signs and unmapped characters are all `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    Consonant,
    Vowel,
    Other,
}

impl From<GraphemeClass> for Context {
    fn from(class: GraphemeClass) -> Self {
        match class {
            GraphemeClass::Consonant => Context::Consonant,
            GraphemeClass::Vowel => Context::Vowel,
            GraphemeClass::Sign => Context::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pub source: String,
    pub target: String,
    pub class: GraphemeClass,
    /// `None` matches any neighbour.
    pub context_before: Option<Context>,
    pub context_after: Option<Context>,
}

impl MappingRule {
    pub fn matches(&self, before: Context, after: Context) -> bool {
        self.context_before.map_or(true, |c| c == before)
            && self.context_after.map_or(true, |c| c == after)
    }
}

/// All rules sharing one source grapheme, most specific first.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub class: GraphemeClass,
    pub rules: Vec<MappingRule>,
}

impl RuleGroup {
    /// First rule whose contexts hold.
    pub fn select(&self, before: Context, after: Context) -> Option<&MappingRule> {
        self.rules.iter().find(|r| r.matches(before, after))
    }
}

/// The immutable rule table consulted by the phoneme mapper.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    groups: HashMap<String, RuleGroup>,
    max_source_len: usize,
}

impl RuleSet {
    /// Group rules by source. Within a source, rule order is preserved.
    pub fn from_rules(rules: impl IntoIterator<Item = MappingRule>) -> Self {
        let mut groups: HashMap<String, RuleGroup> = HashMap::new();
        let mut max_source_len = 0;
        for rule in rules {
            max_source_len = max_source_len.max(rule.source.len());
            groups
                .entry(rule.source.clone())
                .or_insert_with(|| RuleGroup {
                    class: rule.class,
                    rules: Vec::new(),
                })
                .rules
                .push(rule);
        }
        Self {
            groups,
            max_source_len,
        }
    }

    pub fn get(&self, source: &str) -> Option<&RuleGroup> {
        self.groups.get(source)
    }

    /// Length in bytes of the longest source grapheme.
    pub fn max_source_len(&self) -> usize {
        self.max_source_len
    }

    /// Number of distinct source graphemes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &MappingRule> {
        self.groups.values().flat_map(|g| g.rules.iter())
    }
}
