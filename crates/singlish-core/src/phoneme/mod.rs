//! Romanized → Sinhala phoneme mapping.
//!
//! The mapping table is loaded from TOML (`default_mapping.toml` is embedded)
//! and compiled into a [`RuleSet`] of context rules. [`PhonemeMapper`]
//! segments a word by longest match and picks each grapheme's rendering from
//! the classes of its neighbours: consonants take al-lakuna unless a vowel
//! follows, vowels render as signs after a consonant, and `r`/`y` after a
//! consonant join with ZWJ.

mod config;
mod mapper;
mod rule;

pub use config::{parse_mapping_toml, MappingConfigError};
pub use mapper::{PhonemeMapper, Unit};
pub use rule::{Context, GraphemeClass, MappingRule, RuleGroup, RuleSet};

/// Returns the embedded default mapping TOML content.
pub fn default_toml() -> &'static str {
    config::DEFAULT_TOML
}

impl RuleSet {
    /// Compile the embedded default mapping.
    pub fn load_default() -> Result<Self, MappingConfigError> {
        parse_mapping_toml(config::DEFAULT_TOML)
    }
}
